//! Semantic key actions, decoded from raw terminal key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means, independent of which mode consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Left,
    Right,
    Select,
    Compose,
    Send,
    Help,
    Quit,
    Cancel,
    Backspace,
    NewLine,
    Char(char),
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => KeyAction::Send,
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }
        match key.code {
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Enter => KeyAction::Select,
            KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    }
}
