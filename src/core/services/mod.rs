//! Domain services for wheelhouse
//!
//! Business logic that orchestrates the domain models.
//!
//! - [`positional`] - diameters read straight from raw cells
//! - [`measure`] - load, validate, and wrap rows from a source

pub mod measure;
pub mod positional;

pub use measure::measure;
pub use positional::positional_diameters;
