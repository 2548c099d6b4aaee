//! Message list for the current folder.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{App, FocusedPane};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Middle;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let messages = app.current_messages();
    let title = format!("{} ({})", app.current_folder, messages.len());

    let items: Vec<ListItem> = messages
        .iter()
        .map(|msg| {
            let marker = if msg.is_read { "  " } else { "* " };
            let subject_style = if msg.is_read {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(msg.subject.clone(), subject_style),
            ];
            if !msg.labels.is_empty() {
                spans.push(Span::styled(
                    format!("  [{}]", msg.labels.join(", ")),
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", msg.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !messages.is_empty() {
        state.select(Some(app.message_selection.index.min(messages.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
