//! Diagnostic logging setup.
//!
//! The terminal belongs to the UI while the checklist runs, so log records
//! are appended to the file named in the configuration. Without a log file
//! no subscriber is installed and `tracing` events are discarded.

use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use checklist_config::{LOG_FILTER_ENV, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events are logged at the configured level.
const CRATES: &[&str] = &[
    "checklist",
    "checklist_config",
    "checklist_protocol",
    "checklist_tui",
];

/// Installs the global tracing subscriber if a log file is configured.
///
/// The filter comes from the `CHECKLIST_LOG` environment variable when set,
/// and from `logging.level` otherwise. Returns `true` if logging was enabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending, or if a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(true)
}

/// Builds the default filter: warnings from dependencies, the configured
/// level for the checklist crates.
fn default_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_directives_cover_workspace_crates() {
        let directives = default_directives("DEBUG");
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("checklist=debug"));
        assert!(directives.contains("checklist_tui=debug"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn disabled_without_file() {
        let config = LoggingConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("checklist.log")),
            ..Default::default()
        };

        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }

    #[test]
    fn enabled_with_file_installs_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.log");
        let config = LoggingConfig {
            file: Some(path.clone()),
            ..Default::default()
        };

        assert!(init(&config).unwrap());
        assert!(path.exists());

        // A second subscriber cannot replace the first
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("failed to install"));
    }
}
