//! Summary statistics and abnormal-reading counts over loaded records.

use anyhow::{Result, bail};
use serde::Serialize;

use crate::records::VitalRecord;

/// Heart rate above this is counted as abnormal (beats/min).
pub const HIGH_HEART_RATE_BPM: i64 = 90;
/// Systolic blood pressure above this is counted as abnormal (mmHg).
pub const HIGH_SYSTOLIC_BP_MMHG: i64 = 130;
/// Glucose level above this is counted as abnormal (mg/dL).
pub const HIGH_GLUCOSE_MG_DL: i64 = 110;

/// Mean values of the three tracked vitals, at full precision.
///
/// Rounding to one decimal place happens at render time only, so repeated
/// formatting of the same stats is stable.
#[derive(Debug, Serialize)]
pub struct VitalStats {
    pub avg_heart_rate: f64,
    pub avg_systolic_bp: f64,
    pub avg_glucose: f64,
}

impl VitalStats {
    /// Computes the mean heart rate, systolic BP, and glucose level across
    /// all records.
    ///
    /// # Errors
    ///
    /// Fails on an empty dataset; a mean over zero readings is undefined and
    /// is never silently reported as zero or NaN.
    pub fn from_records(records: &[VitalRecord]) -> Result<Self> {
        if records.is_empty() {
            bail!("empty dataset: no readings to average");
        }

        Ok(VitalStats {
            avg_heart_rate: mean(records, |r| r.heart_rate),
            avg_systolic_bp: mean(records, |r| r.blood_pressure_systolic),
            avg_glucose: mean(records, |r| r.glucose_level),
        })
    }
}

/// Arithmetic mean of one integer field across all records.
/// Caller guarantees `records` is non-empty.
fn mean(records: &[VitalRecord], field: impl Fn(&VitalRecord) -> i64) -> f64 {
    let sum: i64 = records.iter().map(&field).sum();
    sum as f64 / records.len() as f64
}

/// Counts of readings strictly above each fixed threshold.
///
/// The counts are independent: a single record can contribute to all three.
#[derive(Debug, Default, Serialize)]
pub struct AbnormalCounts {
    pub high_heart_rate: usize,
    pub high_blood_pressure: usize,
    pub high_glucose: usize,
}

impl AbnormalCounts {
    /// Tallies abnormal readings. Empty input yields all-zero counts; unlike
    /// averaging, counting has a well-defined zero case.
    pub fn from_records(records: &[VitalRecord]) -> Self {
        let mut counts = AbnormalCounts::default();

        for r in records {
            if r.heart_rate > HIGH_HEART_RATE_BPM {
                counts.high_heart_rate += 1;
            }

            if r.blood_pressure_systolic > HIGH_SYSTOLIC_BP_MMHG {
                counts.high_blood_pressure += 1;
            }

            if r.glucose_level > HIGH_GLUCOSE_MG_DL {
                counts.high_glucose += 1;
            }
        }

        counts
    }
}
