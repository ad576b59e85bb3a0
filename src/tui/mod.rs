//! Terminal UI for hot-seat tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use app::App;

/// Runs the tic-tac-toe TUI until the user quits.
pub fn run_tui() -> Result<()> {
    // Log to file to avoid interfering with the TUI.
    let log_file =
        std::fs::File::create("termtoys_tui.log").context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting termtoys TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log_failure(res)
}

/// Logs a game loop failure before handing it back to the caller.
///
/// Runs after teardown, so the terminal is already restored when the
/// binary reports the error and exits nonzero.
fn log_failure(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
                _ => app.handle_key(key),
            }
        }
    }
}
