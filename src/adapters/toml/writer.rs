//! TOML writer for wheels.toml files

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::models::Wheel;

const HEADER: &str = "# wheelhouse data\n# Each row is [rim, tire]. Diameter = rim + 2 * tire.\n\n";

/// Serialized shape of a wheels.toml file
#[derive(Debug, Serialize)]
struct WheelsDocument {
    data: Vec<[f64; 2]>,
}

/// Format wheels as wheels.toml content
///
/// # Errors
///
/// Returns an error if a measurement is not finite, since such a value
/// cannot be read back as a wheel.
pub fn format_wheels_file(wheels: &[Wheel]) -> anyhow::Result<String> {
    if let Some((row, wheel)) =
        wheels.iter().enumerate().find(|(_, w)| !w.rim().is_finite() || !w.tire().is_finite())
    {
        anyhow::bail!(
            "row {row}: cannot write non-finite measurement (rim {}, tire {})",
            wheel.rim(),
            wheel.tire()
        );
    }

    let document = WheelsDocument {
        data: wheels.iter().map(|w| [w.rim(), w.tire()]).collect(),
    };
    Ok(format!("{HEADER}{}", toml::to_string(&document)?))
}

/// Write wheels to a wheels.toml file, replacing any existing content
///
/// # Errors
///
/// Returns an error if a measurement is not finite or the file cannot be
/// written.
pub fn write_wheels_file(path: &Path, wheels: &[Wheel]) -> anyhow::Result<()> {
    fs::write(path, format_wheels_file(wheels)?)?;
    Ok(())
}
