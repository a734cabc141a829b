//! Trip value object
//!
//! A base price and a tax multiplier (1.08 means 8% tax).

/// An immutable trip price quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trip {
    price: f64,
    tax: f64,
}

impl Trip {
    /// Create a trip from a base price and tax multiplier
    #[must_use]
    pub const fn new(price: f64, tax: f64) -> Self {
        Self { price, tax }
    }

    /// Base price before tax
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Tax multiplier
    #[must_use]
    pub const fn tax(&self) -> f64 {
        self.tax
    }

    /// Price with tax applied
    #[must_use]
    pub const fn trip_price(&self) -> f64 {
        self.price * self.tax
    }
}
