//! Interactive goal browser TUI using ratatui.
//!
//! Wraps the view controller in a terminal front end: navigation tabs,
//! a filterable skills list, timeline and insights panels, and modal
//! forms for add/update/delete.

mod app;

pub use app::SksTui;

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::controller::App;
use crate::error::{Result, SksError};

/// RAII guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the browse TUI over the given controller.
pub fn run(app: App) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(SksError::ValidationFailed(
            "browse command requires an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let tui = SksTui::new(app);
    tui.run(&mut terminal)
}
