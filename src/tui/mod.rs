//! Terminal User Interface Module
//!
//! Terminal rendition of the job viewer, built with Ratatui.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 job-lens  12 jobs loaded                        │
//! ├─ File ──────────────────────────────────────────────────────────┤
//! │ ./jobs.json                                                     │
//! ├─ Filters & Sort ────────────────────────────────────────────────┤
//! │ Level All Levels  Type All Types  Skill Rust  Title A-Z  ...    │
//! ├─ Jobs ──────────────────────────────┬─ Details ─────────────────┤
//! │ › Backend Engineer                  │ Backend Engineer          │
//! │   Full-time  Senior  ◷ 180 min ago  │ Skills #Rust  #SQL        │
//! └─────────────────────────────────────┴───────────────────────────┘
//!  12 shown │ [Ctrl+O] Open [Tab] Control [←/→] Change ...
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, Control, View};
pub use event::{AppAction, EventHandler};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{error, info};

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(config: crate::config::Config, file: Option<PathBuf>) -> anyhow::Result<()> {
    info!("Starting TUI mode");

    let tick_rate = std::time::Duration::from_millis(config.viewer.tick_rate_ms);
    let mut app = App::new(config, file);

    // A file given up front is loaded straight away
    if !app.path_input.is_empty() {
        app.load().await;
    }

    let mut terminal = init_terminal()?;
    let mut events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next().await {
            Some(action) => app.handle_action(action).await,
            None => break,
        }
    }

    info!("TUI exited normally");
    Ok(())
}
