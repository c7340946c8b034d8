//! Scheduling configuration file support.
//!
//! Reads scheduling defaults from a `bayplan.toml` file with
//! environment-variable overrides. Every field is defaulted, so the
//! zero-configuration path works out of the box.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ClockTime, OperatingHours};

/// Configuration load or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scheduling defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Slot width in minutes. The platform standard is 30.
    pub slot_interval_minutes: u32,
    /// Opening time applied to weekdays with no configured hours.
    pub default_open: ClockTime,
    /// Closing time applied to weekdays with no configured hours.
    pub default_close: ClockTime,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        let fallback = OperatingHours::default_window();
        Self {
            slot_interval_minutes: 30,
            default_open: fallback.open,
            default_close: fallback.close,
        }
    }
}

impl SchedulingConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SchedulingConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default locations, falling back to the
    /// built-in defaults when no file exists.
    ///
    /// Searches for `bayplan.toml` in the current directory and its parent,
    /// then applies `BAYPLAN_*` environment overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("bayplan.toml"),
            PathBuf::from("../bayplan.toml"),
        ];

        let mut config = Self::default();
        for path in search_paths {
            if path.exists() {
                config = Self::from_file(&path)?;
                break;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BAYPLAN_SLOT_INTERVAL_MINUTES`, `BAYPLAN_DEFAULT_OPEN` and
    /// `BAYPLAN_DEFAULT_CLOSE` environment overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BAYPLAN_SLOT_INTERVAL_MINUTES") {
            self.slot_interval_minutes = val
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("bad slot interval '{}'", val)))?;
        }
        if let Ok(val) = std::env::var("BAYPLAN_DEFAULT_OPEN") {
            self.default_open = val
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("bad default open time '{}'", val)))?;
        }
        if let Ok(val) = std::env::var("BAYPLAN_DEFAULT_CLOSE") {
            self.default_close = val
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("bad default close time '{}'", val)))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_interval_minutes == 0 {
            return Err(ConfigError::Invalid(
                "slot_interval_minutes must be positive".to_string(),
            ));
        }
        if self.default_open >= self.default_close {
            return Err(ConfigError::Invalid(format!(
                "default window is empty: {} >= {}",
                self.default_open, self.default_close
            )));
        }
        Ok(())
    }

    /// The fallback window as operating hours.
    pub fn default_hours(&self) -> OperatingHours {
        OperatingHours::open_between(self.default_open, self.default_close)
    }
}
