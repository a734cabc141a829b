//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pure wheel model and the
//! places raw rows come from (JSON text, TOML files, test fixtures).
//!
//! Implementations live in the `adapters` module.

mod wheel_source;

pub use wheel_source::WheelSource;
