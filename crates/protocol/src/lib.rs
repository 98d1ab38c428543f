//! Wire types shared by the vitals crates.
//!
//! [`BatteryPayload`] is the snapshot produced by the report agent and read by
//! every consumer; [`DerivedInsights`] is what the insight engine hands back.

mod insights;
mod payload;

pub use insights::{DerivedInsights, HealthStatus};
pub use payload::{BatteryInfo, BatteryPayload, CapacityHistoryEntry, HealthSummary, SystemInfo};
