//! CLI entry point for the health sensor data analyzer.
//!
//! Loads a CSV of sensor readings, computes vital averages and
//! abnormal-reading counts, and writes a plain-text summary report.

use anyhow::Result;
use clap::Parser;
use health_analyzer::{
    loader::load_records,
    report::{print_json, render_report, save_report},
    stats::{AbnormalCounts, VitalStats},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "health_analyzer")]
#[command(about = "A tool to analyze health sensor readings", long_about = None)]
struct Cli {
    /// Path to the input CSV of sensor readings
    #[arg(short, long, default_value = "health_data.csv")]
    input: String,

    /// Path to write the report to (parent directory must already exist)
    #[arg(short, long, default_value = "output/analysis_report.txt")]
    output: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/health_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("health_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let records = load_records(&cli.input)?;
    info!(input = %cli.input, total = records.len(), "Records loaded");

    let stats = VitalStats::from_records(&records)?;
    let abnormal = AbnormalCounts::from_records(&records);
    print_json(&stats, &abnormal)?;

    let report = render_report(&stats, &abnormal, records.len());
    save_report(&cli.output, &report)?;
    info!(output = %cli.output, "Report saved");

    println!("Analysis complete. Report saved to '{}'.", cli.output);
    Ok(())
}
