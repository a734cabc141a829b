//! Measure service - load rows from a source and wrap them into wheels

use anyhow::Context;
use log::debug;

use crate::core::models::{Policy, WheelCollection};
use crate::core::ports::WheelSource;

/// Load every row from `source` and validate it under `policy`
///
/// # Errors
///
/// Returns an error if the source cannot be read, or if any row fails
/// validation. Validation errors carry the source description as context.
pub fn measure(source: &dyn WheelSource, policy: Policy) -> anyhow::Result<WheelCollection> {
    let rows = source.rows()?;
    debug!("Loaded {} row(s) from {}", rows.len(), source.describe());

    let wheels = WheelCollection::from_rows(&rows, policy)
        .with_context(|| format!("invalid wheel data in {}", source.describe()))?;
    debug!("Wrapped {} wheel(s) with {policy} policy", wheels.len());

    Ok(wheels)
}
