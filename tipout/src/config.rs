//! Driver configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tip_model::{Amount, BALANCE_TOLERANCE, DEFAULT_SUPPORT_PERCENTAGE};

use crate::report::OutputFormat;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "TIPOUT_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "tipout.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Session snapshot to compute (TOML, or JSON by extension)
    pub session_path: String,

    /// How results are printed
    pub output: OutputFormat,

    /// Keep recomputing as the session file changes
    pub watch: bool,

    /// Polling interval in seconds (watch mode)
    pub poll_interval_secs: u64,

    /// Support pool percentage for sessions that do not set one
    pub default_support_percentage: u8,

    /// Largest payout gap still reported as balanced
    pub balance_tolerance: Amount,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Create default configuration
    pub fn default_local() -> Self {
        Self {
            session_path: "session.toml".to_string(),
            output: OutputFormat::Text,
            watch: false,
            poll_interval_secs: 1,
            default_support_percentage: DEFAULT_SUPPORT_PERCENTAGE,
            balance_tolerance: BALANCE_TOLERANCE,
        }
    }

    /// Session path with `~` and env vars expanded
    pub fn session_path(&self) -> PathBuf {
        match shellexpand::full(&self.session_path) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(shellexpand::tilde(&self.session_path).as_ref()),
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
