use ratatui::{layout::Rect, style::Color};
use vitals_protocol::HealthStatus;

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const BORDER: Color = Color::Gray;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const DANGER: Color = Color::Red;

/// Center a fixed-size rectangle within an area (clamped to fit).
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn color_for_status(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Healthy => SUCCESS,
        HealthStatus::Warning => WARNING,
        HealthStatus::Critical => DANGER,
        HealthStatus::Unknown => MUTED,
    }
}
