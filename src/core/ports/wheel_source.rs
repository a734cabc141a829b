//! Wheel source port
//!
//! Defines the interface for loading raw wheel rows.

use super::super::models::RawRow;

/// A source of raw, unvalidated wheel rows
///
/// Implementations only handle decoding. Validation into
/// [`Wheel`](crate::core::models::Wheel) values happens in the core.
pub trait WheelSource: Send + Sync {
    /// Load every row, in input order
    fn rows(&self) -> anyhow::Result<Vec<RawRow>>;

    /// Short human-readable description, used in logs and error context
    fn describe(&self) -> String;
}
