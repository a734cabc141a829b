//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - inline JSON wheel data
//! - `toml/` - `wheels.toml` file parsing and writing
//! - `rows` - row normalization shared by both

pub mod json;
pub mod rows;
pub mod toml;

pub use self::json::JsonWheelSource;
pub use self::toml::TomlWheelSource;
