//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::config::GlobalConfig;
use crate::core::models::{Trip, WheelCollection};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a diameters operation
#[derive(Debug, Serialize)]
pub struct DiametersResult {
    /// Every wheel with its computed diameter
    pub wheels: Vec<WheelReport>,
    /// Diameters alone, in input order
    pub diameters: Vec<f64>,
}

/// A wheel and its diameter
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelReport {
    /// Rim size
    pub rim: f64,
    /// Tire thickness
    pub tire: f64,
    /// Rim plus twice the tire
    pub diameter: f64,
}

/// Result of a trip price operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TripResult {
    /// Base price
    pub price: f64,
    /// Tax multiplier
    pub tax: f64,
    /// Price with tax applied
    pub trip_price: f64,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl From<&WheelCollection> for DiametersResult {
    fn from(collection: &WheelCollection) -> Self {
        Self {
            wheels: collection
                .iter()
                .map(|w| WheelReport {
                    rim: w.rim(),
                    tire: w.tire(),
                    diameter: w.diameter(),
                })
                .collect(),
            diameters: collection.diameters(),
        }
    }
}

impl From<&Trip> for TripResult {
    fn from(trip: &Trip) -> Self {
        Self {
            price: trip.price(),
            tax: trip.tax(),
            trip_price: trip.trip_price(),
        }
    }
}

impl DiametersResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.wheels.is_empty() {
            println!("No wheels.");
            return;
        }

        println!("Wheels ({}):\n", self.wheels.len());
        for w in &self.wheels {
            println!("  rim {:<8} tire {:<8} diameter {}", w.rim, w.tire, w.diameter);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl TripResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Trip price: {}", self.trip_price);
                println!("  (price {} * tax {})", self.price, self.tax);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Render the configuration and where it lives
pub fn render_config(config: &GlobalConfig, path: &std::path::Path, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            println!("Config: {}\n", path.display());
            println!("  trip.tax            = {}", config.trip.tax);
            println!("  wheels.policy       = {}", config.wheels.policy);
            println!("  wheels.default_file = {}", config.wheels.default_file);
        },
        OutputMode::Json => {
            let json = serde_json::json!({
                "path": path.display().to_string(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        },
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
