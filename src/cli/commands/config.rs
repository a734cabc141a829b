//! Config command - show and update the global configuration

use crate::cli::app::ConfigAction;
use wheelhouse::config::GlobalConfig;
use wheelhouse::output::{OperationResult, OutputMode, render_config};

/// Handle config subcommands
pub fn config(action: ConfigAction, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load();

    match action {
        ConfigAction::Show => {
            render_config(&config, &GlobalConfig::config_path(), mode);
            return Ok(());
        },
        ConfigAction::SetTax { tax } => config.set_tax(tax)?,
        ConfigAction::SetPolicy { policy } => config.set_policy(policy),
    }

    config.save()?;
    OperationResult {
        success: true,
        message: format!("Saved {}", GlobalConfig::config_path().display()),
    }
    .render(mode);

    Ok(())
}
