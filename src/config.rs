//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/wheelhouse/config.toml` (XDG standard).

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::Policy;
use crate::paths;

/// Default tax multiplier for trip prices
pub const DEFAULT_TAX: f64 = 1.08;

/// Global wheelhouse configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Trip pricing preferences
    #[serde(default)]
    pub trip: TripConfig,
    /// Wheel data preferences
    #[serde(default)]
    pub wheels: WheelsConfig,
}

/// Trip pricing preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    /// Tax multiplier used when `--tax` is not given
    #[serde(default = "default_tax")]
    pub tax: f64,
}

const fn default_tax() -> f64 {
    DEFAULT_TAX
}

impl Default for TripConfig {
    fn default() -> Self {
        Self { tax: default_tax() }
    }
}

/// Wheel data preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelsConfig {
    /// Validation policy applied when no `--strict`/`--lenient` flag is given
    #[serde(default)]
    pub policy: Policy,
    /// Data file used when neither `--data` nor `--file` is given
    #[serde(default = "default_file")]
    pub default_file: String,
}

fn default_file() -> String {
    paths::WHEELS_TOML.to_string()
}

impl Default for WheelsConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            default_file: default_file(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or use defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match read_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring unreadable config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default validation policy for wheel data
    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.wheels.policy
    }

    /// Set the default tax multiplier
    ///
    /// # Errors
    ///
    /// Returns an error if `tax` is not a finite number.
    pub fn set_tax(&mut self, tax: f64) -> anyhow::Result<()> {
        if !tax.is_finite() {
            anyhow::bail!("tax must be a finite number, got {tax}");
        }
        self.trip.tax = tax;
        Ok(())
    }

    /// Set the default validation policy
    pub const fn set_policy(&mut self, policy: Policy) {
        self.wheels.policy = policy;
    }
}

fn read_config(path: &Path) -> anyhow::Result<GlobalConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
