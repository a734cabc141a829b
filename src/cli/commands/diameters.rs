//! Diameters command - load wheel rows and print their diameters

use std::path::PathBuf;

use log::debug;

use wheelhouse::adapters::{JsonWheelSource, TomlWheelSource};
use wheelhouse::config::GlobalConfig;
use wheelhouse::core::models::Policy;
use wheelhouse::core::ports::WheelSource;
use wheelhouse::core::services::measure;
use wheelhouse::output::{DiametersResult, OutputMode};

/// Compute the diameter of every wheel from inline JSON or a wheels.toml file
///
/// `strict` overrides the configured policy for this run when set.
pub fn diameters(
    data: Option<&str>,
    file: Option<PathBuf>,
    strict: Option<bool>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let policy = strict.map_or_else(|| config.policy(), Policy::from_strict);

    let source: Box<dyn WheelSource> = match (data, file) {
        (Some(text), _) => Box::new(JsonWheelSource::new(text)),
        (None, Some(path)) => Box::new(TomlWheelSource::new(path)),
        (None, None) => {
            let path = PathBuf::from(&config.wheels.default_file);
            if !path.exists() {
                anyhow::bail!(
                    "no wheel data: {} not found (pass --data or --file, or run 'wheelhouse init')",
                    path.display()
                );
            }
            Box::new(TomlWheelSource::new(path))
        },
    };
    debug!("Reading wheels from {}", source.describe());

    let wheels = measure(source.as_ref(), policy)?;
    DiametersResult::from(&wheels).render(mode);

    Ok(())
}
