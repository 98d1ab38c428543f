use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use color_eyre::eyre::Result;
use tracing::info;
use vitals_report::{build_payload, generate_report, parse_report_file};

use crate::config::UserConfig;

pub fn run(
    output_dir: Option<PathBuf>,
    report_path: Option<PathBuf>,
    json_output: Option<String>,
    config: &UserConfig,
) -> Result<()> {
    let output_dir = output_dir.unwrap_or_else(|| config.collect.output_dir.clone());
    let json_output = json_output.unwrap_or_else(|| config.collect.json_output.clone());

    let report_path = match report_path {
        Some(path) => path,
        None => generate_report(&output_dir, &config.collect.report_filename)?,
    };

    let parsed = parse_report_file(&report_path)?;
    let payload = build_payload(parsed, Utc::now());

    fs::create_dir_all(&output_dir)?;
    let json_path = output_dir.join(json_output);
    fs::write(&json_path, payload.to_json_pretty()?)?;

    info!(
        report = %report_path.display(),
        output = %json_path.display(),
        history_entries = payload.history.len(),
        "Payload written"
    );
    println!("Battery data written to {}", json_path.display());

    Ok(())
}
