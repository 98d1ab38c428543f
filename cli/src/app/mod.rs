//! Application core module.
//!
//! Holds the dashboard state: where the payload comes from, the last payload
//! that loaded successfully and the insights derived from it.

mod tui;
pub mod types;

pub use tui::run_tui;
pub use types::{Action, AppView, StatusMessage};

use tracing::{info, warn};
use vitals_insights::compute_insights;
use vitals_protocol::{BatteryPayload, DerivedInsights};

use crate::loader::{load_payload, PayloadSource};

/// Main application state for the TUI.
pub struct App {
    pub source: PayloadSource,
    pub view: AppView,
    pub payload: BatteryPayload,
    pub insights: DerivedInsights,
    /// Whether any load has succeeded yet.
    pub loaded: bool,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(source: PayloadSource) -> Self {
        let mut app = Self {
            source,
            view: AppView::Main,
            payload: BatteryPayload::default(),
            insights: DerivedInsights::default(),
            loaded: false,
            status: None,
        };
        app.reload();
        app
    }

    /// Loads the payload again.
    ///
    /// On failure the previously displayed payload and insights stay as they
    /// were and the error goes to the status bar.
    pub fn reload(&mut self) -> bool {
        match load_payload(&self.source) {
            Ok(payload) => {
                self.insights = compute_insights(&payload);
                self.payload = payload;
                self.loaded = true;
                info!(source = %self.source, status = %self.insights.status, "Payload loaded");
                self.status = Some(StatusMessage::info(format!("Loaded {}", self.source)));
                true
            }
            Err(e) => {
                warn!(source = %self.source, error = %e, "Payload load failed");
                self.status = Some(StatusMessage::error(e.to_string()));
                false
            }
        }
    }

    /// Applies an action. Returns `false` when the app should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Reload => {
                self.reload();
            }
            Action::ToggleHelp => {
                self.view = match self.view {
                    AppView::Help => AppView::Main,
                    AppView::Main => AppView::Help,
                };
            }
            Action::None => {}
        }
        true
    }
}
