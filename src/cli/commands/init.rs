//! Initialize a sample wheels.toml

use wheelhouse::adapters::toml::write_wheels_file;
use wheelhouse::core::models::Wheel;
use wheelhouse::output::{OperationResult, OutputMode};
use wheelhouse::paths;

/// Write a sample wheels.toml in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::wheels_toml();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({} exists). Use --force to overwrite.", path.display()),
        }
        .render(mode);
        return Ok(());
    }

    let sample = [Wheel::new(100.0, 20.0), Wheel::new(50.0, 10.0)];
    write_wheels_file(&path, &sample)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);

    Ok(())
}
