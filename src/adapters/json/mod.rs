//! JSON wheel source
//!
//! Implements `WheelSource` for JSON text shaped as an array of rows,
//! e.g. `[[100, 20], [50, 10]]`.

use anyhow::Context;
use serde_json::Value;

use crate::core::models::RawRow;
use crate::core::ports::WheelSource;

use super::rows::normalize_rows;

/// Wheel source backed by a JSON document held in memory
#[derive(Debug, Clone)]
pub struct JsonWheelSource {
    text: String,
}

impl JsonWheelSource {
    /// Create a source over the given JSON text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WheelSource for JsonWheelSource {
    fn rows(&self) -> anyhow::Result<Vec<RawRow>> {
        let document: Value = serde_json::from_str(&self.text).context("failed to parse wheel data as JSON")?;

        let Value::Array(rows) = document else {
            anyhow::bail!("wheel data must be a JSON array of rows, e.g. [[100, 20], [50, 10]]");
        };

        Ok(normalize_rows(rows))
    }

    fn describe(&self) -> String {
        "inline JSON".to_string()
    }
}
