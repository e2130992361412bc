//! Configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_EXPORT_SCALE};
pub use types::{Config, ExportConfig, LoggingConfig, PickerConfig};
