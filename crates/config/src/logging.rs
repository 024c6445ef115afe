//! Diagnostic logging configuration.
//!
//! The terminal is owned by the UI while the application runs, so log
//! output can only go to a file. When no file is configured, logging is
//! disabled.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable that overrides the configured log filter.
pub const LOG_FILTER_ENV: &str = "CHECKLIST_LOG";

/// Log levels accepted in `logging.level`.
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for diagnostic logging.
///
/// # Examples
///
/// ```
/// use checklist_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert_eq!(logging.level, "info");
/// assert!(!logging.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (`trace`, `debug`, `info`, `warn`, or `error`).
    #[serde(default = "default_level")]
    pub level: String,

    /// File to append log records to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Returns `true` if a log file is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Validates the log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the level is not one of the
    /// known level names (case-insensitive).
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("unknown level {:?}, expected one of {LEVELS:?}", self.level),
            })
        }
    }
}
