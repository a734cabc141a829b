//! Domain models for wheelhouse
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Wheel`] - rim and tire measurements, by name
//! - [`WheelCollection`] - wheels wrapped once from raw rows
//! - [`Trip`] - base price and tax multiplier
//! - [`Policy`] - how strictly raw rows are validated
//! - [`InputError`] - why a raw row was rejected

mod collection;
mod error;
mod policy;
mod trip;
mod wheel;

pub use collection::WheelCollection;
pub use error::InputError;
pub use policy::Policy;
pub use trip::Trip;
pub use wheel::{Field, RawRow, Wheel, diameter};
