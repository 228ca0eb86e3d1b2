use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::census::MAX_COUNT;
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/enclosed/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("enclosed").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `max_value` leaves room for at least one interval (`>= 1`)
    /// - `default_count` is in `1..=MAX_COUNT`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.census.max_value == 0 {
            return Err(ConfigError::ValidationError {
                message: "census.max_value must be at least 1".to_string(),
            });
        }

        if self.census.default_count == 0 {
            return Err(ConfigError::ValidationError {
                message: "census.default_count must be at least 1".to_string(),
            });
        }

        if self.census.default_count > MAX_COUNT {
            return Err(ConfigError::ValidationError {
                message: format!("census.default_count must be at most {}", MAX_COUNT),
            });
        }

        Ok(())
    }
}
