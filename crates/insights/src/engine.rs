use vitals_protocol::{BatteryPayload, CapacityHistoryEntry, DerivedInsights, HealthStatus};

use crate::health::{
    cycle_penalty, degradation_for, has_strong_capacity, health_score, status_for_score,
    HIGH_CYCLE_THRESHOLD,
};

/// Number of trailing history entries inspected for rapid drain.
pub const RAPID_DRAIN_WINDOW: usize = 3;

/// Capacity loss between the two latest readings that counts as rapid drain.
pub const RAPID_DRAIN_THRESHOLD_MWH: f64 = 1200.0;

mod advice {
    pub const REPLACE_SOON: &str = "Plan for battery replacement within the next 3-6 months.";
    pub const CALIBRATE: &str = "Calibrate the battery monthly and avoid deep discharges.";
    pub const KEEP_OPTIMIZED: &str = "Keep optimized charging enabled to slow aging.";
    pub const HIGH_CYCLES: &str = "High cycle count detected. Reduce full 100% charge time.";
    pub const AUDIT_APPS: &str = "Recent rapid drain detected. Audit background apps.";

    pub const DRAIN_OBSERVED: &str = "Capacity drop between recent reports exceeds 1.2 Wh.";
    pub const CYCLE_HEAVY: &str = "Cycle-heavy usage profile (500+ cycles). Expect faster aging.";
    pub const STRONG_CAPACITY: &str = "Battery retains strong capacity relative to design specs.";
}

/// Whether the two latest usable readings in the trailing history window
/// dropped by more than [`RAPID_DRAIN_THRESHOLD_MWH`].
///
/// Entries without a full-charge capacity are skipped, so the comparison may
/// span a gap in the history.
pub fn rapid_drain_detected(history: &[CapacityHistoryEntry]) -> bool {
    let start = history.len().saturating_sub(RAPID_DRAIN_WINDOW);
    let readings: Vec<f64> = history[start..]
        .iter()
        .filter_map(|entry| entry.full_charge_capacity_mwh)
        .collect();

    match readings.as_slice() {
        [.., previous, latest] => previous - latest > RAPID_DRAIN_THRESHOLD_MWH,
        _ => false,
    }
}

/// Derives health metrics, recommendations and usage insights from a payload.
///
/// Never fails: missing data yields `None` scores, zero penalty, no drain and
/// fewer advisory lines.
pub fn compute_insights(payload: &BatteryPayload) -> DerivedInsights {
    let battery = &payload.battery;

    let health_score = health_score(battery.design_capacity_mwh, battery.full_charge_capacity_mwh);
    let status = status_for_score(health_score);
    let degradation = health_score.map(degradation_for);
    let cycle_penalty = cycle_penalty(battery.cycle_count);
    let rapid_drain = rapid_drain_detected(&payload.history);
    let cycle_heavy = battery.cycle_count.unwrap_or(0) > HIGH_CYCLE_THRESHOLD;

    let mut recommendations = Vec::new();
    match status {
        HealthStatus::Critical => recommendations.push(advice::REPLACE_SOON),
        HealthStatus::Warning => recommendations.push(advice::CALIBRATE),
        HealthStatus::Healthy => recommendations.push(advice::KEEP_OPTIMIZED),
        HealthStatus::Unknown => {}
    }
    if cycle_heavy {
        recommendations.push(advice::HIGH_CYCLES);
    }
    if rapid_drain {
        recommendations.push(advice::AUDIT_APPS);
    }

    let mut usage_insights = Vec::new();
    if rapid_drain {
        usage_insights.push(advice::DRAIN_OBSERVED);
    }
    if cycle_heavy {
        usage_insights.push(advice::CYCLE_HEAVY);
    }
    if has_strong_capacity(health_score) {
        usage_insights.push(advice::STRONG_CAPACITY);
    }

    DerivedInsights {
        health_score,
        status,
        degradation,
        cycle_penalty,
        rapid_drain_detected: rapid_drain,
        recommendations: recommendations.into_iter().map(String::from).collect(),
        usage_insights: usage_insights.into_iter().map(String::from).collect(),
    }
}
