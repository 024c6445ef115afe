//! Configuration management for the checklist application.
//!
//! This crate handles loading, validating, and persisting the application
//! settings. Tasks themselves are never persisted; only display strings,
//! input timing, and logging options live here.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`ui`]: Display strings and input timing
//! - [`logging`]: Diagnostic logging options
//! - [`persistence`]: Config file discovery, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./checklist.json5` or `./checklist.json`)
//! 2. User config (`~/.config/checklist/config.json5` or `~/.config/checklist/config.json`)
//! 3. Built-in defaults
//!
//! The log filter can additionally be overridden with the `CHECKLIST_LOG`
//! environment variable.
//!
//! # Example File
//!
//! ```json5
//! {
//!   ui: { title: "Errands", empty_message: "All clear!" },
//!   input: { double_click_ms: 300 },
//!   logging: { level: "debug", file: "/tmp/checklist.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use checklist_config::Config;
//!
//! # fn example() -> checklist_config::Result<()> {
//! let config = Config::load()?;
//! println!("Title: {}", config.ui.title);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod ui;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::{LOG_FILTER_ENV, LoggingConfig};
pub use ui::{InputConfig, UiConfig};
