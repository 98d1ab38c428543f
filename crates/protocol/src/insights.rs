use std::fmt;

use serde::{Deserialize, Serialize};

/// Health bucket derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    /// No health score could be computed.
    #[default]
    Unknown,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Warning => "Warning",
            HealthStatus::Critical => "Critical",
            HealthStatus::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, HealthStatus::Unknown)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Metrics and advice derived from a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DerivedInsights {
    /// Full-charge capacity as a percentage of design capacity, 2 decimals.
    pub health_score: Option<f64>,
    pub status: HealthStatus,
    /// `100 - health_score`, 2 decimals. `None` whenever `health_score` is.
    pub degradation: Option<f64>,
    /// 0..=15
    pub cycle_penalty: u32,
    pub rapid_drain_detected: bool,
    pub recommendations: Vec<String>,
    pub usage_insights: Vec<String>,
}

impl DerivedInsights {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
