//! Centralized error types for confdeck.
//!
//! Module errors (`ConfigError`, `FixtureError`, `TableError`) convert into
//! [`AppError`], which adds user-facing messages for the dashboard and CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::fixtures::{Dataset, FixtureError};
use crate::table::TableError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Fixture loading errors.
    #[error("{0}")]
    Fixture(#[from] FixtureError),

    /// Table construction errors.
    #[error("{0}")]
    Table(#[from] TableError),

    /// IO errors (file system, stdout, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// A message for people rather than logs: no error chains or paths.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => config_message(e),
            AppError::Fixture(e) => fixture_message(e),
            AppError::Table(e) => format!("Could not build table: {}", e),
            AppError::Io(_) => "Reading or writing failed. Check that the output is writable.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Whether the app cannot start or keep running after this error.
    ///
    /// An unknown dataset name is a usage mistake; everything else here means
    /// the config, the bundled data or the terminal is unusable.
    pub fn is_critical(&self) -> bool {
        !matches!(
            self,
            AppError::Fixture(FixtureError::UnknownDataset(_)) | AppError::Other(_)
        )
    }

    /// A hint printed under the message, if there is one.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_) | ConfigError::ValidationError(_)) => {
                Some("Fix or remove the config file; missing settings fall back to defaults.")
            }
            AppError::Config(ConfigError::NoConfigDir) => {
                Some("Pass --config PATH to choose a config file explicitly.")
            }
            AppError::Fixture(FixtureError::UnknownDataset(_)) => {
                Some("Run 'confdeck list --help' to see the available datasets.")
            }
            _ => None,
        }
    }
}

fn config_message(error: &ConfigError) -> String {
    match error {
        ConfigError::NoConfigDir => "This platform has no configuration directory.".to_string(),
        ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
            "The config file could not be saved. Check permissions on its directory.".to_string()
        }
        ConfigError::ReadError(_) => "The config file exists but could not be read.".to_string(),
        ConfigError::ParseError(e) => format!("The config file is not valid TOML: {}", e.message()),
        ConfigError::SerializeError(_) => "The settings could not be written as TOML.".to_string(),
        ConfigError::ValidationError(msg) => format!("Invalid setting: {}", msg),
    }
}

fn fixture_message(error: &FixtureError) -> String {
    match error {
        FixtureError::Parse { dataset, .. } => {
            format!("The bundled {} data is corrupt.", dataset)
        }
        FixtureError::UnknownDataset(name) => format!(
            "Unknown dataset '{}'. Choose one of: {}.",
            name,
            Dataset::ALL.map(|d| d.name()).join(", ")
        ),
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown(name: &str) -> AppError {
        FixtureError::UnknownDataset(name.to_string()).into()
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(
            AppError::from(ConfigError::NoConfigDir),
            AppError::Config(ConfigError::NoConfigDir)
        ));
        assert!(matches!(
            AppError::from(TableError::NoColumns),
            AppError::Table(TableError::NoColumns)
        ));
        assert!(matches!(unknown("x"), AppError::Fixture(_)));
    }

    #[test]
    fn test_table_error_message() {
        let err = AppError::from(TableError::DuplicateColumn("city".to_string()));
        assert!(err.user_message().contains("'city'"));
        assert!(err.is_critical());
    }

    #[test]
    fn test_unknown_dataset_is_a_usage_error() {
        let err = unknown("budgets");
        let msg = err.user_message();
        assert!(msg.contains("budgets"));
        assert!(msg.contains("registrations"));
        assert!(msg.ends_with("agents, tasks."));
        assert!(!err.is_critical());
        assert!(err.suggested_action().unwrap().contains("--help"));
    }

    #[test]
    fn test_corrupt_fixture() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::Fixture(FixtureError::Parse {
            dataset: Dataset::Venues,
            source,
        });
        assert_eq!(err.user_message(), "The bundled venues data is corrupt.");
        assert!(err.is_critical());
        assert!(err.suggested_action().is_none());
    }

    #[test]
    fn test_config_messages() {
        let invalid = AppError::from(ConfigError::ValidationError("page_size must be".to_string()));
        assert_eq!(invalid.user_message(), "Invalid setting: page_size must be");
        assert!(invalid.suggested_action().unwrap().contains("defaults"));

        let parse = toml::from_str::<crate::config::Config>("settings = 3").unwrap_err();
        let err = AppError::from(ConfigError::ParseError(parse));
        assert!(err.user_message().starts_with("The config file is not valid TOML"));

        let no_dir = AppError::from(ConfigError::NoConfigDir);
        assert!(no_dir.is_critical());
        assert!(no_dir.suggested_action().unwrap().contains("--config"));
    }

    #[test]
    fn test_terminal_and_other() {
        let err = AppError::terminal("raw mode unavailable");
        assert_eq!(err.user_message(), "Terminal error: raw mode unavailable");
        assert!(err.is_critical());

        let err = AppError::other("Cannot sort venues by 'amenities'");
        assert_eq!(err.user_message(), "Cannot sort venues by 'amenities'");
        assert!(!err.is_critical());
    }
}
