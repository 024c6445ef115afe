//! Display text and input timing configuration.
//!
//! This module provides [`UiConfig`], which holds the user-visible strings of
//! the checklist, and [`InputConfig`], which tunes how mouse input is
//! interpreted.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default window for two clicks to count as a double click (milliseconds).
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

/// Minimum allowed double-click window (milliseconds).
pub const MIN_DOUBLE_CLICK_MS: u64 = 100;

/// Maximum allowed double-click window (milliseconds).
pub const MAX_DOUBLE_CLICK_MS: u64 = 2000;

/// User-visible strings of the checklist.
///
/// # Examples
///
/// ```
/// use checklist_config::UiConfig;
///
/// let ui = UiConfig::default();
/// assert_eq!(ui.title, "Checklist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,

    /// Placeholder shown in the empty new-task input.
    #[serde(default = "default_input_placeholder")]
    pub input_placeholder: String,

    /// Message shown instead of the list when there are no tasks.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_title() -> String {
    "Checklist".to_string()
}

fn default_input_placeholder() -> String {
    "Add a new task...".to_string()
}

fn default_empty_message() -> String {
    "No tasks yet. Add the first one!".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            input_placeholder: default_input_placeholder(),
            empty_message: default_empty_message(),
        }
    }
}

impl UiConfig {
    /// Validates the display strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ui.title",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration for input interpretation.
///
/// # Examples
///
/// ```
/// use checklist_config::InputConfig;
///
/// let input = InputConfig::with_double_click_ms(250);
/// assert_eq!(input.double_click_window().as_millis(), 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum delay between two clicks on the same task for them to start
    /// editing it.
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

fn default_double_click_ms() -> u64 {
    DEFAULT_DOUBLE_CLICK_MS
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl InputConfig {
    /// Creates an input configuration with the given double-click window.
    #[must_use]
    pub fn with_double_click_ms(double_click_ms: u64) -> Self {
        Self { double_click_ms }
    }

    /// Returns the double-click window as a [`Duration`](std::time::Duration).
    #[must_use]
    pub fn double_click_window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.double_click_ms)
    }

    /// Validates the input configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the double-click window is
    /// outside `MIN_DOUBLE_CLICK_MS..=MAX_DOUBLE_CLICK_MS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_config::InputConfig;
    ///
    /// assert!(InputConfig::default().validate().is_ok());
    /// assert!(InputConfig::with_double_click_ms(10).validate().is_err());
    /// assert!(InputConfig::with_double_click_ms(5000).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.double_click_ms < MIN_DOUBLE_CLICK_MS {
            return Err(ConfigError::InvalidValue {
                field: "input.double_click_ms",
                reason: format!(
                    "{} is below the minimum of {MIN_DOUBLE_CLICK_MS}",
                    self.double_click_ms
                ),
            });
        }
        if self.double_click_ms > MAX_DOUBLE_CLICK_MS {
            return Err(ConfigError::InvalidValue {
                field: "input.double_click_ms",
                reason: format!(
                    "{} exceeds the maximum of {MAX_DOUBLE_CLICK_MS}",
                    self.double_click_ms
                ),
            });
        }
        Ok(())
    }
}
