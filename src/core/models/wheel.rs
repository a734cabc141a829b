//! Wheel value object
//!
//! A wheel is two measurements: the rim size and the tire thickness.
//! Once built, neither changes. Code that needs a measurement asks for it
//! by name instead of reaching into a raw row by position.

use serde_json::Value;

use super::{InputError, Policy};

/// One row of untyped input, as produced by a wheel source
pub type RawRow = Vec<Value>;

/// An immutable pair of wheel measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    rim: f64,
    tire: f64,
}

/// Names the two measurements of a wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Rim size, position 0 of a raw row
    Rim,
    /// Tire thickness, position 1 of a raw row
    Tire,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rim => write!(f, "rim"),
            Self::Tire => write!(f, "tire"),
        }
    }
}

impl Wheel {
    /// Create a wheel from its rim size and tire thickness
    #[must_use]
    pub const fn new(rim: f64, tire: f64) -> Self {
        Self { rim, tire }
    }

    /// Validate a raw row and wrap it
    ///
    /// `row` is the index of the row in its input, used for error reporting.
    pub fn from_row(row: usize, cells: &[Value], policy: Policy) -> Result<Self, InputError> {
        let [rim, tire] = cells else {
            return Err(InputError::WrongArity {
                row,
                found: cells.len(),
            });
        };

        Ok(Self {
            rim: measurement(row, Field::Rim, rim, policy)?,
            tire: measurement(row, Field::Tire, tire, policy)?,
        })
    }

    /// Rim size
    #[must_use]
    pub const fn rim(&self) -> f64 {
        self.rim
    }

    /// Tire thickness
    #[must_use]
    pub const fn tire(&self) -> f64 {
        self.tire
    }

    /// Overall diameter, see [`diameter`]
    #[must_use]
    pub const fn diameter(&self) -> f64 {
        diameter(self)
    }
}

/// Rim plus twice the tire thickness
#[must_use]
pub const fn diameter(wheel: &Wheel) -> f64 {
    wheel.rim + (wheel.tire * 2.0)
}

impl From<(f64, f64)> for Wheel {
    fn from((rim, tire): (f64, f64)) -> Self {
        Self::new(rim, tire)
    }
}

impl From<[f64; 2]> for Wheel {
    fn from([rim, tire]: [f64; 2]) -> Self {
        Self::new(rim, tire)
    }
}

fn measurement(row: usize, field: Field, value: &Value, policy: Policy) -> Result<f64, InputError> {
    let number = value.as_f64().ok_or_else(|| InputError::NotNumeric {
        row,
        field,
        value: value.to_string(),
    })?;

    if !policy.accepts(number) {
        return Err(InputError::Negative {
            row,
            field,
            value: number.to_string(),
        });
    }

    Ok(number)
}
