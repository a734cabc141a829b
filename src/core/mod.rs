//! Core domain logic for wheelhouse
//!
//! This module contains pure logic with no I/O dependencies.
//! Raw input arrives through the [`ports::WheelSource`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Wheel, WheelCollection, Trip, Policy)
//! - `services/` - Positional diameters and load-and-measure orchestration
//! - `ports/` - Trait definitions for input sources

pub mod models;
pub mod ports;
pub mod services;
