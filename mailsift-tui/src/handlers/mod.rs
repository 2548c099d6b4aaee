//! Key handling, dispatched by app mode.

pub mod key_action;

use crossterm::event::KeyEvent;
use mailsift_core::Folder;

use crate::app::{App, AppMode, FocusedPane, PendingAction};
use key_action::KeyAction;

/// Handle a key event according to the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let action = KeyAction::from(key);
    if action == KeyAction::Quit {
        app.should_quit = true;
        return;
    }
    match app.mode {
        AppMode::Normal => handle_normal(app, action),
        AppMode::Compose => handle_compose(app, action),
        AppMode::Help => handle_help(app, action),
    }
}

fn handle_normal(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::Char('q') => app.should_quit = true,
        KeyAction::Char('c') => {
            app.mode = AppMode::Compose;
            app.set_status("Composing - Ctrl-s to send, Esc to close");
        }
        KeyAction::Char('?') => {
            app.mode = AppMode::Help;
            app.help_scroll = 0;
        }
        KeyAction::Up | KeyAction::Char('k') => move_cursor_up(app),
        KeyAction::Down | KeyAction::Char('j') => move_cursor_down(app),
        KeyAction::Left | KeyAction::Char('h') => {
            app.focused_pane = match app.focused_pane {
                FocusedPane::Right => FocusedPane::Middle,
                _ => FocusedPane::Left,
            };
        }
        KeyAction::Right | KeyAction::Char('l') => {
            app.focused_pane = match app.focused_pane {
                FocusedPane::Left => FocusedPane::Middle,
                _ => FocusedPane::Right,
            };
        }
        KeyAction::Select => {
            if app.focused_pane == FocusedPane::Left {
                app.select_folder(app.folder_selection.index);
                app.focused_pane = FocusedPane::Middle;
            }
        }
        _ => {}
    }
}

fn move_cursor_up(app: &mut App) {
    match app.focused_pane {
        FocusedPane::Left => {
            app.folder_selection.move_up();
            app.select_folder(app.folder_selection.index);
        }
        FocusedPane::Middle | FocusedPane::Right => app.message_selection.move_up(),
    }
}

fn move_cursor_down(app: &mut App) {
    match app.focused_pane {
        FocusedPane::Left => {
            app.folder_selection.move_down(Folder::ALL.len());
            app.select_folder(app.folder_selection.index);
        }
        FocusedPane::Middle | FocusedPane::Right => {
            let len = app.current_messages().len();
            app.message_selection.move_down(len);
        }
    }
}

fn handle_compose(app: &mut App, action: KeyAction) {
    if app.mailbox.is_sending {
        return;
    }
    match action {
        KeyAction::Send => app.pending_action = PendingAction::Send,
        KeyAction::Cancel => {
            // the draft stays in the buffer; `c` resumes it
            app.mode = AppMode::Normal;
            if !app.mailbox.compose_buffer.is_empty() {
                app.set_status("Draft kept - press c to resume");
            }
        }
        KeyAction::Backspace => {
            app.mailbox.compose_buffer.pop();
        }
        KeyAction::Select | KeyAction::NewLine => app.mailbox.compose_buffer.push('\n'),
        KeyAction::Char(c) => app.mailbox.compose_buffer.push(c),
        _ => {}
    }
}

fn handle_help(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::Cancel | KeyAction::Char('q') | KeyAction::Char('?') => {
            app.mode = AppMode::Normal;
        }
        KeyAction::Up | KeyAction::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyAction::Down | KeyAction::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use mailsift_core::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_c_enters_compose_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.mode, AppMode::Compose);
    }

    #[test]
    fn test_typing_fills_compose_buffer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        for ch in "hi".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('!'));
        assert_eq!(app.mailbox.compose_buffer, "hi\n!");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.mailbox.compose_buffer, "hi\n");
    }

    #[test]
    fn test_ctrl_s_queues_send() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        press_ctrl(&mut app, 's');
        assert_eq!(app.pending_action, PendingAction::Send);
    }

    #[test]
    fn test_esc_keeps_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.mailbox.compose_buffer, "x");
        // re-entering compose resumes the draft
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.mailbox.compose_buffer, "xy");
    }

    #[test]
    fn test_compose_keys_ignored_while_sending() {
        let mut app = app();
        app.mode = AppMode::Compose;
        app.mailbox.is_sending = true;
        press(&mut app, KeyCode::Char('x'));
        assert!(app.mailbox.compose_buffer.is_empty());
    }

    #[test]
    fn test_jk_moves_folder_cursor_in_left_pane() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.current_folder, Folder::Business);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.current_folder, Folder::Inbox);
    }

    #[test]
    fn test_hl_moves_focus_between_panes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.focused_pane, FocusedPane::Middle);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.focused_pane, FocusedPane::Right);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.focused_pane, FocusedPane::Middle);
    }

    #[test]
    fn test_enter_never_mutates_filed_messages() {
        use mailsift_core::{
            ClassificationResult, ClassifierSource, ClassifyOutcome, PrimaryLabel,
        };

        let mut app = app();
        app.mailbox.compose_buffer = "hello".to_string();
        app.mailbox.send(|_| ClassifyOutcome {
            result: ClassificationResult {
                primary_classification: PrimaryLabel::NoSpam,
                detailed_labels: vec!["Personal".to_string()],
            },
            source: ClassifierSource::Remote,
            advisory: None,
        });
        app.goto_folder(Folder::Personal);
        app.focused_pane = FocusedPane::Middle;
        press(&mut app, KeyCode::Enter);
        app.focused_pane = FocusedPane::Right;
        press(&mut app, KeyCode::Enter);
        // messages are immutable once filed; there is no read tracking
        assert!(!app.mailbox.messages[0].is_read);
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.help_scroll, 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }
}
