//! Report rendering and persistence.
//!
//! Produces the fixed-layout text summary and writes it to the output file.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::stats::{
    AbnormalCounts, HIGH_GLUCOSE_MG_DL, HIGH_HEART_RATE_BPM, HIGH_SYSTOLIC_BP_MMHG, VitalStats,
};

/// Renders the analysis report.
///
/// Averages are formatted with exactly one decimal place (Rust's `{:.1}`,
/// which rounds half to even); counts are plain integers.
pub fn render_report(stats: &VitalStats, abnormal: &AbnormalCounts, total_readings: usize) -> String {
    format!(
        "Health Data Analysis\n\
         \n\
         Stats:\n\
         Average Heart Rate: {:.1} bpm\n\
         Average Systolic BP: {:.1} mmHg\n\
         Average Glucose Level: {:.1} mg/dL\n\
         \n\
         Abnormal Readings:\n\
         High Heart Rate (>{HIGH_HEART_RATE_BPM} bpm): {}\n\
         High Systolic BP (>{HIGH_SYSTOLIC_BP_MMHG} mmHg): {}\n\
         High Glucose Level (>{HIGH_GLUCOSE_MG_DL} mg/dL): {}\n\
         Total Readings: {}\n",
        stats.avg_heart_rate,
        stats.avg_systolic_bp,
        stats.avg_glucose,
        abnormal.high_heart_rate,
        abnormal.high_blood_pressure,
        abnormal.high_glucose,
        total_readings,
    )
}

/// Writes the report verbatim to `path`, creating or truncating the file.
///
/// The parent directory must already exist; a missing directory surfaces as
/// a write error naming the path.
pub fn save_report(path: &str, report: &str) -> Result<()> {
    std::fs::write(path, report)
        .with_context(|| format!("failed to write report to '{path}'"))?;

    debug!(path, bytes = report.len(), "Report written");
    Ok(())
}

/// Logs the computed summary as pretty-printed JSON.
pub fn print_json(stats: &VitalStats, abnormal: &AbnormalCounts) -> Result<()> {
    let summary = serde_json::json!({
        "stats": stats,
        "abnormal": abnormal,
    });
    info!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
