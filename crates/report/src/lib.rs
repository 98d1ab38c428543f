//! Battery report agent for vitals.
//!
//! Windows can describe its battery with `powercfg /batteryreport`, which
//! writes a standalone HTML page. This crate runs that command, scrapes the
//! fields vitals cares about out of the page and assembles a
//! [`BatteryPayload`](vitals_protocol::BatteryPayload) with a precomputed
//! health summary.
//!
//! # Example
//!
//! ```ignore
//! use vitals_report::{build_payload, parse_report_file};
//!
//! let parsed = parse_report_file("battery-report.html".as_ref())?;
//! let payload = build_payload(parsed, chrono::Utc::now());
//! println!("{}", payload.to_json_pretty()?);
//! ```

mod agent;
mod html;
mod parser;

pub use agent::{build_payload, generate_report, parse_report_file, ReportError, REPORT_FILENAME};
pub use parser::{parse_battery_report, ParsedReport};
