use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::registry::Registry;

#[derive(Parser, Debug)]
#[command(
    name = "giveaway-picker",
    version,
    about = "Pick a random giveaway winner from a list of names"
)]
pub struct Cli {
    #[arg(short, long, value_name = "PATH", help = "Config file path")]
    pub config: Option<PathBuf>,
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        help = "Newline-delimited names to preload"
    )]
    pub names_file: Option<PathBuf>,
    #[arg(short, long, value_name = "DIR", help = "Override the export directory")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, value_name = "MS", help = "Override the shuffle tick interval")]
    pub interval_ms: Option<u64>,
    #[arg(long, value_name = "MS", help = "Override the total shuffle duration")]
    pub duration_ms: Option<u64>,
    #[arg(long, help = "Pick without the TUI and print the winner")]
    pub headless: bool,
    #[arg(long, requires = "headless", help = "Also write the winner card")]
    pub export: bool,
    #[arg(value_name = "NAMES", help = "Participant names")]
    pub names: Vec<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ms) = self.interval_ms {
            config.picker.shuffle_interval_ms = ms;
        }
        if let Some(ms) = self.duration_ms {
            config.picker.shuffle_duration_ms = ms;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = Some(dir.clone());
        }
    }

    /// Build the starting registry: the names file first, then positional names.
    pub fn registry(&self) -> std::io::Result<Registry> {
        let mut registry = Registry::new();
        if let Some(path) = &self.names_file {
            registry.add_bulk(&std::fs::read_to_string(path)?);
        }
        for name in &self.names {
            registry.add_one(name);
        }
        Ok(registry)
    }
}
