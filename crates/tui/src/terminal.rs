//! Terminal lifecycle.
//!
//! [`TerminalSession`] puts the terminal into raw mode on the alternate
//! screen and puts it back when restored or dropped. [`install_panic_hook`]
//! does the same from a panic so the message lands on a usable screen.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enables raw mode, enters the alternate screen and wraps stdout in a
/// Ratatui terminal.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// An active full-screen terminal, restored on [`restore`](Self::restore)
/// or drop.
///
/// # Examples
///
/// ```no_run
/// use taskflow_tui::terminal::{self, TerminalSession};
///
/// # fn main() -> Result<(), taskflow_tui::terminal::TerminalError> {
/// terminal::install_panic_hook();
/// let mut session = TerminalSession::start()?;
/// session.terminal_mut().clear().ok();
/// session.restore()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    terminal: AppTerminal,
    active: bool,
}

impl TerminalSession {
    /// Sets up the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode or
    /// the alternate screen.
    pub fn start() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: setup_terminal()?,
            active: true,
        })
    }

    /// Returns the terminal to draw on.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the terminal, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.active = false;
        restore_terminal(&mut self.terminal)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal(&mut self.terminal) {
                warn!(error = %e, "terminal left unrestored");
            }
        }
    }
}

/// Installs a panic hook that restores the terminal, then runs the hook
/// that was installed before.
///
/// Call once at startup, before [`TerminalSession::start`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
