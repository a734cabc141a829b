//! TOML parser for wheels.toml files
//!
//! Handles reading and deserializing wheel data files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

/// A wheels.toml file structure
#[derive(Debug, Default, Deserialize)]
pub struct WheelsFile {
    /// Raw `[rim, tire]` entries, normalized into rows by the source and
    /// validated later by the core
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Load wheel rows from a wheels.toml file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<WheelsFile> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse wheels.toml content
///
/// # Errors
///
/// Returns an error if the content is not valid TOML or `data` is not an
/// array.
pub fn parse(content: &str) -> anyhow::Result<WheelsFile> {
    Ok(toml::from_str(content)?)
}
