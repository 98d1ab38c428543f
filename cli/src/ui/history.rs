use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use vitals_protocol::CapacityHistoryEntry;

use crate::app::App;
use crate::format::group_thousands;

use super::utils::{ACCENT, BORDER, MUTED};

/// `(index, mWh)` points for entries that carry a full-charge reading.
fn capacity_points(history: &[CapacityHistoryEntry]) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| entry.full_charge_capacity_mwh.map(|mwh| (i as f64, mwh)))
        .collect()
}

fn design_points(history: &[CapacityHistoryEntry]) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| entry.design_capacity_mwh.map(|mwh| (i as f64, mwh)))
        .collect()
}

fn y_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let margin = ((max - min) * 0.1).max(500.0);
    [(min - margin).max(0.0), max + margin]
}

fn date_label(entry: Option<&CapacityHistoryEntry>) -> Span<'static> {
    let date = entry.map(|e| e.date.as_str()).unwrap_or_default();
    // Report periods look like "2024-01-01 - 2024-01-07"; keep the start.
    let start = date.split(" - ").next().unwrap_or(date).trim();
    Span::styled(start.to_string(), Style::default().fg(MUTED))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Capacity history ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));

    let history = &app.payload.history;
    let capacity = capacity_points(history);

    if capacity.len() < 2 {
        let message = Paragraph::new(Span::styled(
            "Not enough history to chart",
            Style::default().fg(MUTED),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let design = design_points(history);
    let all: Vec<(f64, f64)> = capacity.iter().chain(design.iter()).copied().collect();
    let [y_min, y_max] = y_bounds(&all);
    let x_max = history.len().saturating_sub(1).max(1) as f64;

    let mut datasets = vec![Dataset::default()
        .name("full charge")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(ACCENT))
        .data(&capacity)];
    if !design.is_empty() {
        datasets.push(
            Dataset::default()
                .name("design")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(MUTED))
                .data(&design),
        );
    }

    let x_axis = Axis::default()
        .style(Style::default().fg(MUTED))
        .bounds([0.0, x_max])
        .labels(vec![
            date_label(history.first()),
            date_label(app.payload.latest_history()),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(MUTED))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(group_thousands(y_min as u64)),
            Span::raw(group_thousands(y_max as u64)),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
