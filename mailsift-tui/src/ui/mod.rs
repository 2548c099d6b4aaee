//! Rendering for the mailsift TUI.

pub mod left_pane;
pub mod middle_pane;
pub mod overlays;
pub mod right_pane;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Draw the whole UI for one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(outer[0]);

    left_pane::draw(frame, app, panes[0]);
    middle_pane::draw(frame, app, panes[1]);
    right_pane::draw(frame, app, panes[2]);
    status_bar::draw(frame, app, outer[1]);

    match app.mode {
        AppMode::Compose => overlays::draw_compose(frame, app),
        AppMode::Help => overlays::draw_help(frame, app),
        AppMode::Normal => {}
    }
}

/// A centered rectangle taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
