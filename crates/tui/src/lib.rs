//! Terminal UI for the checklist application.
//!
//! This crate provides a Ratatui-based checklist widget: an input field for
//! new tasks, a list of tasks that can be checked off, edited inline, or
//! deleted, and a summary of the counts.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`state`]: The checklist state and its operations
//! - [`input`]: Single-line text buffer with a cursor
//! - [`app`]: Main application struct and run loop
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Screen layout and size limits
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Rendering functions for each screen component
//!
//! # Example
//!
//! ```no_run
//! use checklist_config::Config;
//! use checklist_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::with_config(Config::load()?);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use input::TextInput;
pub use state::{ChecklistState, EditingState, Focus};
