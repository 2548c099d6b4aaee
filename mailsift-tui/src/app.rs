//! Application state for the mailsift TUI.

use std::time::{Duration, Instant};

use mailsift_core::{AppConfig, Folder, Mailbox, Message};

/// Which input mode the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Compose,
    Help,
}

/// Which pane has keyboard focus in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Left,
    Middle,
    Right,
}

/// Action queued by a key handler, executed by the main loop between draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    None,
    Send,
}

/// Cursor position within a list; scrolling is handled by the list widget.
#[derive(Debug, Default, Clone, Copy)]
pub struct Selection {
    pub index: usize,
}

impl Selection {
    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }
}

/// Top-level TUI state.
pub struct App {
    pub config: AppConfig,
    pub mailbox: Mailbox,
    pub mode: AppMode,
    pub focused_pane: FocusedPane,
    pub folder_selection: Selection,
    pub message_selection: Selection,
    pub current_folder: Folder,
    pub status_message: Option<String>,
    pub pending_action: PendingAction,
    /// Scheduled auto-navigation after a successful send.
    pub navigate_at: Option<(Instant, Folder)>,
    pub should_quit: bool,
    pub help_scroll: u16,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mailbox = Mailbox::new(&config.sender);
        Self {
            config,
            mailbox,
            mode: AppMode::Normal,
            focused_pane: FocusedPane::Left,
            folder_selection: Selection::default(),
            message_selection: Selection::default(),
            current_folder: Folder::Inbox,
            status_message: None,
            pending_action: PendingAction::None,
            navigate_at: None,
            should_quit: false,
            help_scroll: 0,
        }
    }

    /// Messages in the currently selected folder, newest first.
    pub fn current_messages(&self) -> Vec<&Message> {
        self.mailbox.messages_in(self.current_folder)
    }

    /// The message under the cursor, if any.
    pub fn selected_message(&self) -> Option<&Message> {
        self.current_messages()
            .get(self.message_selection.index)
            .copied()
    }

    /// Switch the sidebar cursor and the visible folder together.
    pub fn select_folder(&mut self, index: usize) {
        let index = index.min(Folder::ALL.len() - 1);
        self.folder_selection.index = index;
        self.current_folder = Folder::ALL[index];
        self.message_selection = Selection::default();
    }

    /// Jump directly to `folder`, moving the sidebar cursor with it.
    pub fn goto_folder(&mut self, folder: Folder) {
        if let Some(index) = Folder::ALL.iter().position(|&f| f == folder) {
            self.select_folder(index);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Schedule a jump to `folder` after the configured delay.
    pub fn schedule_navigate(&mut self, folder: Folder) {
        let delay = Duration::from_millis(self.config.ui.navigate_delay_ms);
        self.navigate_at = Some((Instant::now() + delay, folder));
    }

    /// Perform a scheduled navigation if its time has come. Returns true if
    /// the folder changed.
    pub fn tick_navigation(&mut self) -> bool {
        match self.navigate_at {
            Some((when, folder)) if Instant::now() >= when => {
                self.navigate_at = None;
                self.goto_folder(folder);
                true
            }
            _ => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    #[test]
    fn test_starts_in_inbox_normal_mode() {
        let app = app();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.current_folder, Folder::Inbox);
        assert_eq!(app.folder_selection.index, 0);
    }

    #[test]
    fn test_select_folder_clamps_and_resets_message_cursor() {
        let mut app = app();
        app.message_selection.index = 5;
        app.select_folder(100);
        assert_eq!(app.current_folder, Folder::Spam);
        assert_eq!(app.message_selection.index, 0);
    }

    #[test]
    fn test_goto_folder_moves_sidebar_cursor() {
        let mut app = app();
        app.goto_folder(Folder::Business);
        assert_eq!(app.current_folder, Folder::Business);
        assert_eq!(app.folder_selection.index, 1);
    }

    #[test]
    fn test_tick_navigation_waits_for_deadline() {
        let mut app = app();
        app.navigate_at = Some((Instant::now() + Duration::from_secs(60), Folder::Spam));
        assert!(!app.tick_navigation());
        assert_eq!(app.current_folder, Folder::Inbox);

        app.navigate_at = Some((Instant::now() - Duration::from_millis(1), Folder::Spam));
        assert!(app.tick_navigation());
        assert_eq!(app.current_folder, Folder::Spam);
        assert!(app.navigate_at.is_none());
    }

    #[test]
    fn test_selection_move_down_is_bounded() {
        let mut sel = Selection::default();
        sel.move_down(0);
        assert_eq!(sel.index, 0);
        sel.move_down(2);
        assert_eq!(sel.index, 1);
        sel.move_down(2);
        assert_eq!(sel.index, 1);
        sel.move_up();
        assert_eq!(sel.index, 0);
    }
}
