mod advice;
mod health;
mod help;
mod history;
mod status_bar;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const HEALTH_HEIGHT: u16 = 11;
const HISTORY_MIN: u16 = 8;

pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    status_bar::render_title_bar(frame, rows[0], app);
    render_content(frame, rows[1], app);
    status_bar::render_status_bar(frame, rows[2], app);

    if app.view == AppView::Help {
        help::render_help(frame);
    }
}

fn render_content(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let show_history = area.height >= HEALTH_HEIGHT + HISTORY_MIN;

    let constraints = if show_history {
        vec![Constraint::Length(HEALTH_HEIGHT), Constraint::Min(HISTORY_MIN)]
    } else {
        vec![Constraint::Min(0)]
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);

    health::render(frame, top[0], app);
    advice::render(frame, top[1], app);

    if show_history {
        history::render(frame, rows[1], app);
    }
}
