use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::keys;

use super::utils::{ACCENT, BORDER, DANGER, MUTED};

fn padded(left: Vec<Span<'static>>, right: Span<'static>, width: u16) -> Line<'static> {
    let left_width: usize = left.iter().map(|s| s.width()).sum();
    let padding = (width as usize).saturating_sub(left_width + right.width());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(right);
    Line::from(spans)
}

pub fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let left = vec![
        Span::styled(" vitals ", Style::default().fg(ACCENT)),
        Span::styled(format!("v{}", super::VERSION), Style::default().fg(MUTED)),
    ];

    let product = app
        .payload
        .system
        .as_ref()
        .and_then(|s| s.product.clone())
        .unwrap_or_default();
    let right = Span::styled(format!("{} ", product), Style::default().fg(MUTED));

    frame.render_widget(Paragraph::new(padded(left, right, area.width)), area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = [
        (keys::RELOAD, "reload"),
        (keys::HELP, "help"),
        (keys::QUIT, "quit"),
    ];

    let mut left: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            left.push(Span::styled(" │ ", Style::default().fg(BORDER)));
        }
        left.push(Span::styled(*key, Style::default().fg(ACCENT)));
        left.push(Span::styled(format!(" {}", desc), Style::default().fg(MUTED)));
    }

    let right = match &app.status {
        Some(status) => {
            let color = if status.is_error() { DANGER } else { MUTED };
            Span::styled(format!("{} ", status.text), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    frame.render_widget(Paragraph::new(padded(left, right, area.width)), area);
}
