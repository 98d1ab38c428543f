//! Battery health insight engine.
//!
//! Everything here is a pure function of its input: no I/O, no global state.
//! [`compute_insights`] is the entry point used by the presentation layer;
//! [`summarize_health`] produces the precomputed `health` section the report
//! agent embeds in payloads, using the same rules so the two never disagree.

mod engine;
mod health;

pub use engine::{
    compute_insights, rapid_drain_detected, RAPID_DRAIN_THRESHOLD_MWH, RAPID_DRAIN_WINDOW,
};
pub use health::{
    cycle_penalty, degradation_for, health_score, round2, status_for_score, summarize_health,
    RemainingLife, HIGH_CYCLE_THRESHOLD, MAX_CYCLE_PENALTY,
};
