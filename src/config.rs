//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory and includes:
//! - Simulated submission delay and outcome
//! - UI language
//! - Log file location

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::locale::Locale;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "APPLYFORM_CONFIG";
/// Environment override for `submit_delay_ms`
pub const DELAY_ENV: &str = "APPLYFORM_SUBMIT_DELAY_MS";
/// Environment override for `locale`
pub const LOCALE_ENV: &str = "APPLYFORM_LOCALE";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated submission delay in milliseconds (default: 1000)
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// UI language (default: ko)
    #[serde(default)]
    pub locale: Locale,

    /// Make every simulated submission fail
    #[serde(default)]
    pub simulate_failure: bool,

    /// Where to write logs; no logging when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_submit_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            locale: Locale::default(),
            simulate_failure: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Get the default config file location
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "applyform", "applyform")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Pick the config file: explicit path, then `APPLYFORM_CONFIG`, then the default
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_path()
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Load the resolved config file and apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `APPLYFORM_SUBMIT_DELAY_MS` and `APPLYFORM_LOCALE` when set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var(DELAY_ENV)
            && !value.is_empty()
        {
            self.submit_delay_ms = value.trim().parse().map_err(|_| {
                AppError::Config(format!("{DELAY_ENV} must be a whole number of milliseconds, got '{value}'"))
            })?;
        }
        if let Ok(value) = env::var(LOCALE_ENV)
            && !value.is_empty()
        {
            self.locale = value.parse()?;
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
