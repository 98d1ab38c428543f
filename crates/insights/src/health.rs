use std::fmt;

use vitals_protocol::{BatteryInfo, HealthStatus, HealthSummary};

/// Cycle count above which the battery is considered cycle-heavy.
pub const HIGH_CYCLE_THRESHOLD: u32 = 500;

/// Upper bound for [`cycle_penalty`].
pub const MAX_CYCLE_PENALTY: u32 = 15;

const CYCLES_PER_PENALTY_POINT: u32 = 50;

const CRITICAL_BELOW: f64 = 60.0;
const WARNING_BELOW: f64 = 70.0;
const STRONG_CAPACITY_AT: f64 = 85.0;

/// Rounds to 2 decimal places, ties away from zero.
///
/// Operates on the binary value, so `x.xx5` literals that are stored slightly
/// below the tie round down.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full-charge capacity as a percentage of design capacity.
///
/// `None` when either capacity is missing or the design capacity is not positive.
pub fn health_score(design_mwh: Option<f64>, full_mwh: Option<f64>) -> Option<f64> {
    match (design_mwh, full_mwh) {
        (Some(design), Some(full)) if design > 0.0 => Some(round2(full / design * 100.0)),
        _ => None,
    }
}

pub fn degradation_for(score: f64) -> f64 {
    round2(100.0 - score)
}

pub fn status_for_score(score: Option<f64>) -> HealthStatus {
    match score {
        None => HealthStatus::Unknown,
        Some(s) if s < CRITICAL_BELOW => HealthStatus::Critical,
        Some(s) if s < WARNING_BELOW => HealthStatus::Warning,
        Some(_) => HealthStatus::Healthy,
    }
}

/// Penalty points for heavy cycling: one point per 50 cycles past 500, capped at 15.
pub fn cycle_penalty(cycle_count: Option<u32>) -> u32 {
    let cycles = cycle_count.unwrap_or(0);
    if cycles <= HIGH_CYCLE_THRESHOLD {
        return 0;
    }
    ((cycles - HIGH_CYCLE_THRESHOLD) / CYCLES_PER_PENALTY_POINT).min(MAX_CYCLE_PENALTY)
}

pub(crate) fn has_strong_capacity(score: Option<f64>) -> bool {
    score.is_some_and(|s| s >= STRONG_CAPACITY_AT)
}

/// Rough replacement horizon for a given health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainingLife {
    EighteenToTwentyFourMonths,
    TwelveToEighteenMonths,
    SixToTwelveMonths,
    UnderSixMonths,
    #[default]
    Unknown,
}

impl RemainingLife {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => RemainingLife::Unknown,
            Some(s) if s >= STRONG_CAPACITY_AT => RemainingLife::EighteenToTwentyFourMonths,
            Some(s) if s >= WARNING_BELOW => RemainingLife::TwelveToEighteenMonths,
            Some(s) if s >= CRITICAL_BELOW => RemainingLife::SixToTwelveMonths,
            Some(_) => RemainingLife::UnderSixMonths,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RemainingLife::EighteenToTwentyFourMonths => "18-24 months",
            RemainingLife::TwelveToEighteenMonths => "12-18 months",
            RemainingLife::SixToTwelveMonths => "6-12 months",
            RemainingLife::UnderSixMonths => "0-6 months",
            RemainingLife::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RemainingLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Builds the precomputed `health` section for a payload.
///
/// Unlike [`health_score`], a zero full-charge capacity is read as a missing
/// reading here: the report shows 0 when the battery could not be queried, so
/// the summary reports no score and an "unknown" remaining life.
pub fn summarize_health(battery: &BatteryInfo) -> HealthSummary {
    let full = battery.full_charge_capacity_mwh.filter(|mwh| *mwh != 0.0);
    let score = health_score(battery.design_capacity_mwh, full);

    HealthSummary {
        health_percentage: score,
        degradation_percentage: score.map(degradation_for),
        cycle_penalty: Some(cycle_penalty(battery.cycle_count)),
        estimated_remaining_life: Some(RemainingLife::from_score(score).label().to_string()),
    }
}
