use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shuffle timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Delay between flicker ticks in milliseconds (default: 100).
    #[serde(default = "default_shuffle_interval_ms")]
    pub shuffle_interval_ms: u64,
    /// Total shuffle length in milliseconds (default: 3000).
    #[serde(default = "default_shuffle_duration_ms")]
    pub shuffle_duration_ms: u64,
}

/// Winner card export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for `winner-*.png`. Defaults to the download directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// TTF/OTF used for card text. Defaults to a well-known system font.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// Pixel multiplier over the 480x400 base card (default: 2).
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Optional line printed under a rule at the bottom of the card.
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the local data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_shuffle_interval_ms() -> u64 {
    100
}

fn default_shuffle_duration_ms() -> u64 {
    3000
}

fn default_scale() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            shuffle_interval_ms: default_shuffle_interval_ms(),
            shuffle_duration_ms: default_shuffle_duration_ms(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            font_path: None,
            scale: default_scale(),
            footer: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ExportConfig {
    /// Configured directory, else the user's download directory, else `.`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl LoggingConfig {
    /// Configured log file, else `<data_local_dir>/giveaway-picker/giveaway-picker.log`.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("giveaway-picker")
                .join("giveaway-picker.log")
        })
    }
}
