use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};
use vitals_insights::summarize_health;
use vitals_protocol::BatteryPayload;

use crate::parser::{parse_battery_report, ParsedReport};

/// File name `powercfg` is asked to write.
pub const REPORT_FILENAME: &str = "battery-report.html";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to run powercfg: {0}")]
    Spawn(std::io::Error),

    #[error("powercfg exited with {0}")]
    CommandFailed(ExitStatus),
}

/// Runs `powercfg /batteryreport` and returns the path of the written report.
///
/// Only works on Windows; elsewhere the command cannot be spawned and
/// [`ReportError::Spawn`] is returned.
pub fn generate_report(output_dir: &Path, filename: &str) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(output_dir)?;
    let report_path = output_dir.join(filename);

    info!(path = %report_path.display(), "Generating battery report");

    let status = Command::new("powercfg")
        .args(["/batteryreport", "/output"])
        .arg(&report_path)
        .status()
        .map_err(ReportError::Spawn)?;

    if !status.success() {
        return Err(ReportError::CommandFailed(status));
    }

    Ok(report_path)
}

/// Reads and parses a report from disk. Invalid UTF-8 is replaced, not rejected.
pub fn parse_report_file(path: &Path) -> Result<ParsedReport, ReportError> {
    let bytes = fs::read(path)?;
    let html = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "Read battery report");
    Ok(parse_battery_report(&html))
}

/// Assembles a payload from a parsed report, attaching a precomputed health
/// summary and the generation time.
pub fn build_payload(report: ParsedReport, generated_at: DateTime<Utc>) -> BatteryPayload {
    let health = summarize_health(&report.battery);

    BatteryPayload {
        system: Some(report.system),
        battery: report.battery,
        health: Some(health),
        history: report.history,
        generated_at: Some(generated_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
    }
}
