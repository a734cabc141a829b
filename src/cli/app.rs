//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use wheelhouse::core::models::Policy;
use wheelhouse::output::OutputMode;

/// wheelhouse - Wheel diameters and trip prices from value objects
#[derive(Parser, Debug)]
#[command(
    name = "wheelhouse",
    version,
    about = "Wheel diameters and trip prices from value objects",
    long_about = "Wrap raw [rim, tire] rows into wheels and compute their diameters.\n\n\
                  Rows are validated once, when they are wrapped.\n\
                  Every diameter is rim + 2 * tire."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a sample wheels.toml in the current directory
    Init {
        /// Overwrite an existing wheels.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Compute the diameter of every wheel
    Diameters {
        /// Inline JSON rows, e.g. '[[100, 20], [50, 10]]'
        #[arg(short, long, conflicts_with = "file")]
        data: Option<String>,

        /// Path to a wheels.toml file (default: wheels.toml)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Reject negative rim or tire measurements for this run
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Accept negative measurements for this run, even if config is strict
        #[arg(long)]
        lenient: bool,
    },

    /// Compute a trip price (price * tax)
    Trip {
        /// Base price
        #[arg(short, long, allow_negative_numbers = true)]
        price: f64,

        /// Tax multiplier (default: from config, 1.08)
        #[arg(short, long, allow_negative_numbers = true)]
        tax: Option<f64>,
    },

    /// Show or change the global configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the default tax multiplier
    SetTax {
        /// Tax multiplier, e.g. 1.08
        tax: f64,
    },

    /// Set the default validation policy
    SetPolicy {
        /// lenient or non_negative (alias: strict)
        policy: Policy,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Diameters {
            data,
            file,
            strict,
            lenient,
        }) => {
            let strict = match (strict, lenient) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            };
            commands::diameters(data.as_deref(), file, strict, output_mode)
        },
        Some(Command::Trip { price, tax }) => commands::trip(price, tax, output_mode),
        Some(Command::Config { action }) => commands::config(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("wheelhouse {}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "name": "wheelhouse",
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("wheelhouse v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'wheelhouse --help' for usage");
                println!("Run 'wheelhouse init' to get started");
            }
            Ok(())
        },
    }
}
