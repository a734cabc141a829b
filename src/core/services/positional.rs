//! Positional diameter computation
//!
//! Computes diameters directly from `[rim, tire]` cells without wrapping
//! them. Callers must know that index 0 is the rim and index 1 the tire;
//! [`WheelCollection`](crate::core::models::WheelCollection) hides that
//! knowledge behind named accessors and must always agree with this function.

/// Diameter of every cell, where `cell[0]` is the rim and `cell[1]` the tire
#[must_use]
pub fn positional_diameters(data: &[[f64; 2]]) -> Vec<f64> {
    data.iter().map(|cell| cell[0] + (cell[1] * 2.0)).collect()
}
