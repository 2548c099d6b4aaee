//! mailsift-tui: terminal UI for composing and auto-filing messages.

mod app;
mod handlers;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use mailsift_core::{AppConfig, AppPaths, ClassifierClient, ClassifyOutcome};

use app::{App, AppMode, PendingAction};

const POLL_TIMEOUT_MS: u64 = 100;

fn main() -> Result<()> {
    let paths = AppPaths::discover(None).context("discovering config paths")?;
    let config = AppConfig::load(&paths).context("loading configuration")?;
    let client = ClassifierClient::from_config(&config.classifier, config.ui.fallback_delay_ms)
        .context("building classifier client")?;

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app, &client);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leaving alternate screen")?;
    terminal.show_cursor().context("restoring cursor")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &ClassifierClient,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.pending_action == PendingAction::Send {
            // one extra frame so the sending state is visible before the
            // blocking classification call
            app.mailbox.is_sending = true;
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.mailbox.is_sending = false;
            process_pending_action(app, |text| client.classify_with_fallback(text));
        }

        app.tick_navigation();

        if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Execute a queued send: classify the compose buffer, file the message, and
/// schedule the auto-navigation to the destination folder.
fn process_pending_action(app: &mut App, classify: impl FnOnce(&str) -> ClassifyOutcome) {
    if app.pending_action != PendingAction::Send {
        return;
    }
    app.pending_action = PendingAction::None;

    match app.mailbox.send(classify) {
        Some(folder) => {
            let status = match app.mailbox.last_advisory.clone() {
                Some(advisory) => format!("Filed to {folder} ({advisory})"),
                None => format!("Filed to {folder}"),
            };
            app.set_status(status);
            app.mode = AppMode::Normal;
            app.schedule_navigate(folder);
        }
        None => app.set_status("Nothing to send"),
    }
}
