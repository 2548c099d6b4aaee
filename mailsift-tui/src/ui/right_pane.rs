//! Message preview pane.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, FocusedPane};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Right;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title("Preview")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match app.selected_message() {
        Some(msg) => {
            let meta = Style::default().fg(Color::DarkGray);
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("From: ", meta),
                    Span::raw(msg.sender.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Date: ", meta),
                    Span::raw(msg.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()),
                ]),
                Line::from(vec![
                    Span::styled("Subject: ", meta),
                    Span::raw(msg.subject.clone()),
                ]),
            ];
            if !msg.labels.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Labels: ", meta),
                    Span::styled(msg.labels.join(", "), Style::default().fg(Color::Yellow)),
                ]));
            }
            lines.push(Line::default());
            lines.extend(msg.body.lines().map(|l| Line::from(l.to_string())));
            lines
        }
        None => vec![Line::from(Span::styled(
            "No message selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
