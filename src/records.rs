//! Record type for rows of the health-sensor CSV.

use serde::Deserialize;

/// A single sensor reading, deserialized from one CSV row.
///
/// Field order matches the file's column order. The timestamp is kept as the
/// raw string from the file and never parsed further.
#[derive(Debug, Clone, Deserialize)]
pub struct VitalRecord {
    pub patient_id: String,
    pub timestamp: String,
    pub heart_rate: i64,
    pub blood_pressure_systolic: i64,
    pub blood_pressure_diastolic: i64,
    pub temperature: f64,
    pub glucose_level: i64,
    pub sensor_id: String,
}
