//! Input validation errors
//!
//! Raised when a raw row cannot be turned into a [`Wheel`](super::Wheel).
//! Row indexes are zero-based, matching the position in the input sequence.

use thiserror::Error;

use super::wheel::Field;

/// Errors that can occur when validating raw wheel rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Row did not contain exactly two elements
    #[error("row {row}: expected 2 elements (rim, tire), found {found}")]
    WrongArity {
        /// Index of the offending row
        row: usize,
        /// Number of elements actually present
        found: usize,
    },

    /// An element was not a finite number
    ///
    /// Non-finite floats (`nan`, `inf`) reach validation as `null`.
    #[error("row {row}: {field} is not a finite number: {value}")]
    NotNumeric {
        /// Index of the offending row
        row: usize,
        /// Which measurement was rejected
        field: Field,
        /// The rejected value, as written in the input
        value: String,
    },

    /// A measurement was negative under [`Policy::NonNegative`](super::Policy::NonNegative)
    #[error("row {row}: {field} must not be negative: {value}")]
    Negative {
        /// Index of the offending row
        row: usize,
        /// Which measurement was rejected
        field: Field,
        /// The rejected value, as written in the input
        value: String,
    },
}

impl InputError {
    /// Index of the row that failed validation
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::WrongArity { row, .. } | Self::NotNumeric { row, .. } | Self::Negative { row, .. } => {
                *row
            },
        }
    }
}
