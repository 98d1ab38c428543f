use std::fmt::Write;

use color_eyre::eyre::Result;
use serde_json::json;
use tracing::debug;
use vitals_insights::compute_insights;
use vitals_protocol::{BatteryPayload, DerivedInsights};

use crate::config::UserConfig;
use crate::format::{format_mwh, format_opt, format_percent, or_missing};
use crate::loader::{load_payload, PayloadSource};

const LABEL_WIDTH: usize = 22;

pub fn run(source: Option<&str>, as_json: bool, compact: bool, config: &UserConfig) -> Result<()> {
    let source = PayloadSource::resolve(source, config);
    let payload = load_payload(&source)?;
    let insights = compute_insights(&payload);

    debug!(
        status = %insights.status,
        health_score = ?insights.health_score,
        cycle_penalty = insights.cycle_penalty,
        rapid_drain = insights.rapid_drain_detected,
        "Computed insights"
    );

    if as_json {
        let doc = json!({
            "source": source.to_string(),
            "insights": insights,
            "payload": payload,
        });
        if compact {
            println!("{}", serde_json::to_string(&doc)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    } else {
        print!("{}", render_report(&payload, &insights));
    }

    Ok(())
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<width$}{}", label, value, width = LABEL_WIDTH);
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
}

fn bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Plain-text report of a payload and its derived insights.
pub fn render_report(payload: &BatteryPayload, insights: &DerivedInsights) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Battery health report");
    let _ = writeln!(out, "=====================");

    if let Some(system) = &payload.system {
        heading(&mut out, "System");
        row(&mut out, "Product", or_missing(system.product.as_deref()));
        row(&mut out, "BIOS", or_missing(system.bios.as_deref()));
        row(&mut out, "OS build", or_missing(system.os_build.as_deref()));
        row(&mut out, "Report time", or_missing(system.report_time.as_deref()));
    }

    let battery = &payload.battery;
    heading(&mut out, "Battery");
    row(&mut out, "Name", or_missing(battery.name.as_deref()));
    row(&mut out, "Manufacturer", or_missing(battery.manufacturer.as_deref()));
    row(&mut out, "Chemistry", or_missing(battery.chemistry.as_deref()));
    row(&mut out, "Design capacity", &format_mwh(battery.design_capacity_mwh));
    row(
        &mut out,
        "Full charge capacity",
        &format_mwh(battery.full_charge_capacity_mwh),
    );
    row(&mut out, "Cycle count", &format_opt(battery.cycle_count));

    heading(&mut out, "Health");
    row(
        &mut out,
        "Health score",
        &format!(
            "{} ({})",
            format_percent(insights.health_score),
            insights.status
        ),
    );
    row(&mut out, "Degradation", &format_percent(insights.degradation));
    row(&mut out, "Cycle penalty", &insights.cycle_penalty.to_string());
    row(
        &mut out,
        "Rapid drain",
        if insights.rapid_drain_detected {
            "detected"
        } else {
            "no"
        },
    );
    let remaining_life = payload
        .health
        .as_ref()
        .and_then(|h| h.estimated_remaining_life.as_deref());
    row(&mut out, "Est. remaining life", or_missing(remaining_life));

    heading(&mut out, "Recommendations");
    bullets(&mut out, &insights.recommendations);

    heading(&mut out, "Usage insights");
    bullets(&mut out, &insights.usage_insights);

    if !payload.history.is_empty() {
        heading(&mut out, "Capacity history");
        if let Some(latest) = payload.latest_history() {
            row(&mut out, "Latest period", or_missing(Some(latest.date.as_str())));
        }
        for entry in &payload.history {
            let _ = writeln!(
                out,
                "  {:<32}{:>14}  {:>14}",
                or_missing(Some(entry.date.as_str())),
                format_mwh(entry.full_charge_capacity_mwh),
                format_mwh(entry.design_capacity_mwh)
            );
        }
    }

    if let Some(generated_at) = &payload.generated_at {
        let _ = writeln!(out, "\nGenerated at {}", generated_at);
    }

    out
}
