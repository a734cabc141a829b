//! Wheel collection
//!
//! Wraps raw rows into [`Wheel`] values once, at construction. The raw input
//! is not kept; everything afterwards works on named measurements.

use super::wheel::{RawRow, Wheel, diameter};
use super::{InputError, Policy};

/// An ordered, immutable sequence of wheels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelCollection {
    wheels: Vec<Wheel>,
}

impl WheelCollection {
    /// Wrap each pair into a wheel, keeping input order
    #[must_use]
    pub fn new<I, P>(data: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Wheel>,
    {
        Self {
            wheels: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate raw rows and wrap them
    ///
    /// Stops at the first invalid row.
    pub fn from_rows(rows: &[RawRow], policy: Policy) -> Result<Self, InputError> {
        let wheels = rows
            .iter()
            .enumerate()
            .map(|(index, cells)| Wheel::from_row(index, cells, policy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { wheels })
    }

    /// Diameter of every wheel, in order
    #[must_use]
    pub fn diameters(&self) -> Vec<f64> {
        self.wheels.iter().map(diameter).collect()
    }

    /// The wrapped wheels
    #[must_use]
    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// Iterate over the wheels in order
    pub fn iter(&self) -> std::slice::Iter<'_, Wheel> {
        self.wheels.iter()
    }

    /// Number of wheels
    #[must_use]
    pub fn len(&self) -> usize {
        self.wheels.len()
    }

    /// Whether the collection holds no wheels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wheels.is_empty()
    }
}

impl<'a> IntoIterator for &'a WheelCollection {
    type Item = &'a Wheel;
    type IntoIter = std::slice::Iter<'a, Wheel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
