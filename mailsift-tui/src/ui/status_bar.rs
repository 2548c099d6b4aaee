//! Bottom status bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppMode};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let (badge, badge_color) = match app.mode {
        AppMode::Normal => (" NORMAL ", Color::Blue),
        AppMode::Compose => (" COMPOSE ", Color::Green),
        AppMode::Help => (" HELP ", Color::Magenta),
    };

    let mut spans = vec![Span::styled(
        badge,
        Style::default()
            .fg(Color::Black)
            .bg(badge_color)
            .add_modifier(Modifier::BOLD),
    )];

    if app.mailbox.is_sending {
        spans.push(Span::styled(
            " sending...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(status) = &app.status_message {
        spans.push(Span::raw(format!(" {status}")));
    }

    let hints = match app.mode {
        AppMode::Normal => "c: compose  j/k: move  h/l: pane  ?: help  q: quit",
        AppMode::Compose => "Ctrl-s: send  Esc: close (draft kept)",
        AppMode::Help => "j/k: scroll  Esc: close",
    };
    spans.push(Span::styled(
        format!("  |  {hints}"),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
