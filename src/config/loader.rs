use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

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

/// Largest accepted `export.scale`.
pub const MAX_EXPORT_SCALE: u32 = 4;

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/giveaway-picker/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("giveaway-picker").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
    /// - Shuffle interval and duration are non-zero
    /// - Export scale is within `1..=MAX_EXPORT_SCALE`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.picker.shuffle_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "picker.shuffle_interval_ms must be greater than 0".to_string(),
            });
        }

        if self.picker.shuffle_duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "picker.shuffle_duration_ms must be greater than 0".to_string(),
            });
        }

        if !(1..=MAX_EXPORT_SCALE).contains(&self.export.scale) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "export.scale must be between 1 and {}, got {}",
                    MAX_EXPORT_SCALE, self.export.scale
                ),
            });
        }

        Ok(())
    }
}
