//! Trip command - price a trip with tax

use log::debug;

use wheelhouse::config::GlobalConfig;
use wheelhouse::core::models::Trip;
use wheelhouse::output::{OutputMode, TripResult};

/// Compute a trip price, falling back to the configured tax multiplier
pub fn trip(price: f64, tax: Option<f64>, mode: OutputMode) -> anyhow::Result<()> {
    let tax = match tax {
        Some(tax) => tax,
        None => {
            let configured = GlobalConfig::load().trip.tax;
            debug!("Using configured tax {configured}");
            configured
        },
    };

    let trip = Trip::new(price, tax);
    TripResult::from(&trip).render(mode);

    Ok(())
}
