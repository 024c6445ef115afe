//! checklist - A terminal checklist with inline editing.
//!
//! This is the main binary that loads the configuration and launches the
//! TUI application.

mod logging;

use anyhow::Context;
use checklist_config::Config;
use checklist_tui::{App, terminal};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    if logging::init(&config.logging)? {
        info!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
    }
    debug!(?config, "configuration loaded");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(config);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
