//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the checklist application.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::ui::{InputConfig, UiConfig};

/// The main configuration struct for the checklist application.
///
/// Every section is optional in the file; missing sections take their
/// defaults.
///
/// # Examples
///
/// ```
/// use checklist_config::{Config, InputConfig};
///
/// let config = Config::default();
/// assert_eq!(config.ui.title, "Checklist");
///
/// let config = Config {
///     input: InputConfig::with_double_click_ms(300),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// User-visible strings.
    #[serde(default)]
    pub ui: UiConfig,

    /// Input interpretation settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Diagnostic logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./checklist.json5` or `./checklist.json`
    /// 2. User: `~/.config/checklist/config.json5` or `~/.config/checklist/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                Self::load_from(path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use checklist_config::Config;
    ///
    /// # fn example() -> checklist_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<()> {
        self.ui.validate()?;
        self.input.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
