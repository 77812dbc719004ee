//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::fixtures::Dataset;

/// Default rows per page for local pagination.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 500;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset shown when the dashboard opens.
    pub default_dataset: String,
    /// Rows per page.
    pub page_size: usize,
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
    /// The UI theme to use.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_dataset: Dataset::Events.name().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            vim_mode: true,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` describing the first invalid
    /// value.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.default_dataset.parse::<Dataset>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "default_dataset '{}' is not a known dataset",
                self.default_dataset
            )));
        }

        if !matches!(self.theme.as_str(), "dark" | "light") {
            return Err(ConfigError::ValidationError(format!(
                "theme must be 'dark' or 'light', got '{}'",
                self.theme
            )));
        }

        Ok(())
    }

    /// The configured default dataset, falling back to events.
    pub fn dataset(&self) -> Dataset {
        self.default_dataset.parse().unwrap_or_default()
    }
}
