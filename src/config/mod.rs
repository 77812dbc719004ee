//! Configuration management for confdeck.
//!
//! Settings live in a TOML file in the platform config directory
//! (`~/.config/confdeck/config.toml` on Linux). A missing file means
//! defaults. A file that cannot be parsed or fails validation is an error.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{Settings, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Name of the configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("Failed to create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The config file could not be read.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config file could not be written.
    #[error("Failed to write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The config file is not valid TOML for [`Config`].
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A value is out of range or unknown.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application settings.
    pub settings: Settings,
}

impl Config {
    /// Path of the default config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no config
    /// directory.
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("confdeck").join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the config from `path`, using defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::parse(&contents)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate config file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()
    }

    /// Save the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(ConfigError::WriteError)?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }
}
