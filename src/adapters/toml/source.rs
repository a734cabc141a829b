//! TOML-based wheel source
//!
//! Implements the `WheelSource` port trait using wheels.toml files.

use std::path::{Path, PathBuf};

use crate::adapters::rows::normalize_rows;
use crate::core::models::RawRow;
use crate::core::ports::WheelSource;

use super::parser::load_file;

/// Wheel source backed by a wheels.toml file
#[derive(Debug, Clone)]
pub struct TomlWheelSource {
    path: PathBuf,
}

impl TomlWheelSource {
    /// Create a source reading the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WheelSource for TomlWheelSource {
    fn rows(&self) -> anyhow::Result<Vec<RawRow>> {
        Ok(normalize_rows(load_file(&self.path)?.data))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
