use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::utils::{ACCENT, BORDER, MUTED};

fn section(title: &'static str, items: &[String], lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    if items.is_empty() {
        lines.push(Line::from(Span::styled("  none", Style::default().fg(MUTED))));
    }
    for item in items {
        lines.push(Line::from(format!("  • {}", item)));
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Advice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));

    let mut lines = Vec::new();
    if app.loaded {
        section("Recommendations", &app.insights.recommendations, &mut lines);
        lines.push(Line::default());
        section("Usage insights", &app.insights.usage_insights, &mut lines);
    } else {
        lines.push(Line::from(Span::styled(
            "No payload loaded. Press r to retry.",
            Style::default().fg(MUTED),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
