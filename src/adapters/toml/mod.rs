//! TOML-based wheel source
//!
//! Implements `WheelSource` using wheels.toml files.
//!
//! - [`parser`] - Read and deserialize wheels.toml files
//! - [`writer`] - Create wheels.toml files
//! - [`source`] - `WheelSource` implementation

pub mod parser;
pub mod source;
pub mod writer;

pub use parser::{WheelsFile, load_file, parse};
pub use source::TomlWheelSource;
pub use writer::{format_wheels_file, write_wheels_file};
