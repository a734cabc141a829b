//! Row normalization shared by the JSON and TOML adapters

use serde_json::Value;

use crate::core::models::RawRow;

/// Split decoded `data` entries into raw rows
///
/// Non-array entries become single-element rows so validation reports the
/// arity at the right index instead of failing the whole document.
#[must_use]
pub fn normalize_rows(entries: Vec<Value>) -> Vec<RawRow> {
    entries
        .into_iter()
        .map(|entry| match entry {
            Value::Array(cells) => cells,
            other => vec![other],
        })
        .collect()
}
