//! Command implementations

mod config;
mod diameters;
mod init;
mod trip;

pub use config::config;
pub use diameters::diameters;
pub use init::init;
pub use trip::trip;
