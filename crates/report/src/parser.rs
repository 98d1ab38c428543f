use tracing::debug;
use vitals_protocol::{BatteryInfo, CapacityHistoryEntry, SystemInfo};

use crate::html::{clean_text, elements, find_label_value, find_section_table};

const HISTORY_SECTION: &str = "Battery capacity history";
const HISTORY_HEADER: &str = "period";
const HISTORY_MIN_CELLS: usize = 3;

/// Everything vitals reads out of a battery report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedReport {
    pub system: SystemInfo,
    pub battery: BatteryInfo,
    pub history: Vec<CapacityHistoryEntry>,
}

/// Keeps only the ASCII digits, so `"45,010 mWh"` reads as 45010.
fn parse_digits(value: Option<&str>) -> Option<u64> {
    let digits: String = value?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn parse_system_info(html: &str) -> SystemInfo {
    SystemInfo {
        product: find_label_value(html, "System Product Name"),
        bios: find_label_value(html, "BIOS"),
        os_build: find_label_value(html, "OS build"),
        report_time: find_label_value(html, "Report Time"),
    }
}

fn parse_battery_info(html: &str) -> BatteryInfo {
    let number = |label: &str| parse_digits(find_label_value(html, label).as_deref());
    let mwh = |label: &str| number(label).map(|n| n as f64);

    BatteryInfo {
        name: find_label_value(html, "Name"),
        manufacturer: find_label_value(html, "Manufacturer"),
        chemistry: find_label_value(html, "Chemistry"),
        design_capacity_mwh: mwh("Design Capacity"),
        full_charge_capacity_mwh: mwh("Full Charge Capacity"),
        cycle_count: number("Cycle Count").and_then(|n| u32::try_from(n).ok()),
    }
}

fn parse_capacity_history(html: &str) -> Vec<CapacityHistoryEntry> {
    let Some(table) = find_section_table(html, HISTORY_SECTION) else {
        return Vec::new();
    };

    elements(table, &["tr"])
        .into_iter()
        .filter_map(|row| {
            let cells: Vec<String> = elements(row, &["td", "th"])
                .into_iter()
                .map(clean_text)
                .collect();

            if cells.len() < HISTORY_MIN_CELLS || cells[0].eq_ignore_ascii_case(HISTORY_HEADER) {
                return None;
            }

            Some(CapacityHistoryEntry {
                date: cells[0].clone(),
                full_charge_capacity_mwh: parse_digits(Some(cells[1].as_str())).map(|n| n as f64),
                design_capacity_mwh: parse_digits(Some(cells[2].as_str())).map(|n| n as f64),
            })
        })
        .collect()
}

/// Scrapes system, battery and capacity-history data from a report page.
///
/// Missing labels become `None`; a missing history section yields no entries.
pub fn parse_battery_report(html: &str) -> ParsedReport {
    let report = ParsedReport {
        system: parse_system_info(html),
        battery: parse_battery_info(html),
        history: parse_capacity_history(html),
    };

    debug!(
        history_rows = report.history.len(),
        has_design = report.battery.design_capacity_mwh.is_some(),
        has_full = report.battery.full_charge_capacity_mwh.is_some(),
        "Parsed battery report"
    );

    report
}
