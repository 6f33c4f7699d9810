//! 终端界面
//!
//! ratatui + crossterm front end. The loop redraws, drains pending key
//! events, then waits one tick for a feedback expiry. Waiting on the tokio
//! side is what lets the feedback timers run on the current-thread runtime.

mod app;
mod ui;

pub use app::{App, AppAction, InputMode, StatusLine};

use crate::feedback::FeedbackExpired;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

const TICK: Duration = Duration::from_millis(50);

/// Take over the terminal, run until the user quits, then restore it
pub async fn run(
    app: &mut App,
    feedback_rx: &mut mpsc::UnboundedReceiver<FeedbackExpired>,
) -> io::Result<()> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, feedback_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Restore the terminal before the default panic hook runs
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    feedback_rx: &mut mpsc::UnboundedReceiver<FeedbackExpired>,
) -> io::Result<()> {
    tracing::info!("Welcome to {}! Press 'a' to add the highlighted dish", app.store_name);

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && app.handle_key(key) == AppAction::Quit
            {
                return Ok(());
            }
        }

        tokio::select! {
            Some(expired) = feedback_rx.recv() => app.on_feedback_expired(expired),
            _ = tokio::time::sleep(TICK) => {}
        }
    }
}
