//! Modal overlays: compose editor and help.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;

pub fn draw_compose(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let title = if app.mailbox.is_sending {
        "Compose (sending...)"
    } else {
        "Compose"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines: Vec<Line> = app
        .mailbox
        .compose_buffer
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    if app.mailbox.compose_buffer.ends_with('\n') || lines.is_empty() {
        lines.push(Line::default());
    }
    // crude cursor at the end of the text
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("_", Style::default().fg(Color::Green)));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn draw_help(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let entries: &[(&str, &str)] = &[
        ("j / Down", "move down"),
        ("k / Up", "move up"),
        ("h / Left", "focus pane left"),
        ("l / Right", "focus pane right"),
        ("Enter", "open selected folder"),
        ("c", "compose a message"),
        ("Ctrl-s", "send (while composing)"),
        ("Esc", "close compose (draft kept) / close overlay"),
        ("?", "toggle this help"),
        ("q / Ctrl-c", "quit"),
    ];

    let mut lines = vec![
        Line::from("Messages you send are classified and filed automatically."),
        Line::from("If the classification service is offline, local keyword"),
        Line::from("rules decide the folder instead."),
        Line::default(),
    ];
    lines.extend(entries.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("{key:<12}"), Style::default().fg(Color::Cyan)),
            Span::raw(*what),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.help_scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
