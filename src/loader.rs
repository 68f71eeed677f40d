//! CSV loading for health-sensor readings.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::records::VitalRecord;

/// Reads all sensor records from the CSV file at `path`.
///
/// The first line is treated as a header and skipped. File order is
/// preserved. A header-only file yields an empty vector; emptiness is the
/// caller's concern.
///
/// # Errors
///
/// Fails if the file cannot be opened, or on the first row that does not
/// match the 8-column schema or whose numeric fields fail to parse. The
/// diagnostic names the path and the offending line.
pub fn load_records(path: &str) -> Result<Vec<VitalRecord>> {
    let file = File::open(path).with_context(|| format!("failed to open input file '{path}'"))?;
    let records =
        read_records(file).with_context(|| format!("failed to load records from '{path}'"))?;

    debug!(path, total = records.len(), "Records loaded");
    Ok(records)
}

/// Reads sensor records from any reader producing CSV with a header row.
pub fn read_records(reader: impl Read) -> Result<Vec<VitalRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // Line 1 is the header, so data row i sits on line i + 2
        let record: VitalRecord =
            result.with_context(|| format!("malformed row at line {}", i + 2))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "patient_id,timestamp,heart_rate,blood_pressure_systolic,\
                          blood_pressure_diastolic,temperature,glucose_level,sensor_id";

    #[test]
    fn test_read_valid_rows() {
        let csv = format!(
            "{HEADER}\nP001,2024-01-15 08:00:00,72,118,78,36.6,95,S01\n\
             P002,2024-01-15 08:05:00,88,125,82,37.0,104,S02\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_id, "P001");
        assert_eq!(records[0].heart_rate, 72);
        assert_eq!(records[0].temperature, 36.6);
        assert_eq!(records[1].glucose_level, 104);
        assert_eq!(records[1].sensor_id, "S02");
    }

    #[test]
    fn test_read_preserves_file_order() {
        let csv = format!(
            "{HEADER}\nP003,2024-01-15 09:00:00,60,110,70,36.4,90,S01\n\
             P001,2024-01-15 09:05:00,61,111,71,36.5,91,S01\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].patient_id, "P003");
        assert_eq!(records[1].patient_id, "P001");
    }

    #[test]
    fn test_read_header_only_yields_empty() {
        let csv = format!("{HEADER}\n");
        let records = read_records(csv.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_malformed_numeric_field_names_line() {
        let csv = format!(
            "{HEADER}\nP001,2024-01-15 08:00:00,72,118,78,36.6,95,S01\n\
             P002,2024-01-15 08:05:00,not_a_number,125,82,37.0,104,S02\n"
        );
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
    }

    #[test]
    fn test_read_wrong_field_count_is_error() {
        let csv = format!("{HEADER}\nP001,2024-01-15 08:00:00,72,118\n");
        assert!(read_records(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_records("does_not_exist.csv").unwrap_err();
        assert!(format!("{err:#}").contains("does_not_exist.csv"));
    }
}
