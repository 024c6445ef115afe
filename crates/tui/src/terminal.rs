//! Terminal setup and teardown utilities.
//!
//! The checklist runs in raw mode on the alternate screen with mouse capture
//! enabled, so checkbox clicks and double clicks reach the application. Every
//! step taken by [`setup_terminal`] is undone by [`restore_terminal`], and by
//! the panic hook from [`install_panic_hook`] if the application panics.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

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

/// Result type for terminal operations.
pub type Result<T> = std::result::Result<T, TerminalError>;

/// Switches the terminal into TUI mode and returns a Ratatui terminal.
///
/// Enables raw mode, enters the alternate screen, and turns on mouse
/// capture. If a later step fails, raw mode is switched off again before the
/// error is returned.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use checklist_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// // Draw frames...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().map_err(TerminalError::Setup)?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(TerminalError::Setup(err));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Returns the terminal to normal line-buffered mode.
///
/// Disables mouse capture and raw mode, leaves the alternate screen, and
/// shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal before the panic message
/// is printed.
///
/// The previously installed hook is chained and runs after restoration, so
/// the panic message lands on the normal screen. Call this once at startup,
/// before [`setup_terminal`].
///
/// # Examples
///
/// ```no_run
/// use checklist_tui::terminal;
///
/// terminal::install_panic_hook();
/// let terminal = terminal::setup_terminal().expect("failed to setup terminal");
/// ```
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        original_hook(panic_info);
    }));
}
