//! Centralized path definitions for wheelhouse
//!
//! This module provides a single source of truth for all filesystem paths
//! used by wheelhouse.
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! └── wheels.toml               # Wheel data read by `wheelhouse diameters`
//!
//! ~/.config/wheelhouse/
//! └── config.toml               # User preferences (tax, validation policy)
//! ```
//!
//! The global directory can be moved with `WHEELHOUSE_CONFIG_DIR`.

use std::env;
use std::path::PathBuf;

/// Default wheel data filename
pub const WHEELS_TOML: &str = "wheels.toml";

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "WHEELHOUSE_CONFIG_DIR";

/// Global directory name under the user config dir
const GLOBAL_DIR: &str = "wheelhouse";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the default `wheels.toml` in the current directory.
#[must_use]
pub fn wheels_toml() -> PathBuf {
    PathBuf::from(WHEELS_TOML)
}

/// Get the global config directory.
///
/// Returns `$WHEELHOUSE_CONFIG_DIR` when set and non-empty, otherwise
/// `~/.config/wheelhouse` (XDG standard).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
