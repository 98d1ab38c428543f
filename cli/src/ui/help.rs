use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::KEY_BINDINGS;
use crate::ui::VERSION;

use super::utils::{centered_rect, ACCENT, MUTED};

pub fn render_help(frame: &mut Frame) {
    let height = KEY_BINDINGS.len() as u16 + 8;
    let area: Rect = centered_rect(frame.area(), 48, height);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let mut lines = vec![
        Line::from(Span::styled(
            "vitals - Battery Health Dashboard",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Version {}", VERSION),
            Style::default().fg(MUTED),
        )),
        Line::default(),
    ];

    for binding in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", binding.key), Style::default().fg(ACCENT)),
            Span::raw(binding.description),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(MUTED),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
