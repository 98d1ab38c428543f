use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::format::{format_mwh, format_opt, format_percent, or_missing};

use super::utils::{color_for_status, BORDER, DANGER, MUTED, SUCCESS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Health ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    render_gauge(frame, chunks[0], app);
    render_metrics(frame, chunks[2], app);
}

fn render_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let insights = &app.insights;
    let color = color_for_status(insights.status);
    let ratio = insights
        .health_score
        .map(|score| (score / 100.0).clamp(0.0, 1.0))
        .unwrap_or(0.0);
    let label = if insights.status.is_known() {
        format!("{} {}", format_percent(insights.health_score), insights.status)
    } else {
        "No health score".to_string()
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label)
        .use_unicode(true);

    frame.render_widget(gauge, area);
}

fn metric(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(MUTED)),
        Span::raw(value),
    ])
}

fn render_metrics(frame: &mut Frame, area: Rect, app: &App) {
    let battery = &app.payload.battery;
    let insights = &app.insights;

    let drain = if insights.rapid_drain_detected {
        Span::styled(
            "detected",
            Style::default().fg(DANGER).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("no", Style::default().fg(SUCCESS))
    };

    let remaining_life = app
        .payload
        .health
        .as_ref()
        .and_then(|h| h.estimated_remaining_life.as_deref());

    let lines = vec![
        metric("Design", format_mwh(battery.design_capacity_mwh)),
        metric("Full charge", format_mwh(battery.full_charge_capacity_mwh)),
        metric("Degradation", format_percent(insights.degradation)),
        metric("Cycles", format_opt(battery.cycle_count)),
        metric("Cycle penalty", insights.cycle_penalty.to_string()),
        metric("Remaining life", or_missing(remaining_life).to_string()),
        Line::from(vec![
            Span::styled(format!("{:<16}", "Rapid drain"), Style::default().fg(MUTED)),
            drain,
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
