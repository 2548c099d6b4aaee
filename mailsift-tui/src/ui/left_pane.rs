//! Folder sidebar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::{App, FocusedPane};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_pane == FocusedPane::Left;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = app
        .mailbox
        .folder_counts()
        .into_iter()
        .map(|(folder, count)| {
            let mut spans = vec![Span::raw(folder.as_str().to_string())];
            if count > 0 {
                spans.push(Span::styled(
                    format!(" ({count})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let mut line = Line::from(spans);
            if folder == app.current_folder {
                line = line.style(Style::default().add_modifier(Modifier::BOLD));
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Folders")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.folder_selection.index));
    frame.render_stateful_widget(list, area, &mut state);
}
