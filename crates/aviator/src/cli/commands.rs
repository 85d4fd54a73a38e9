//! CLI command definitions.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for `aviator serve`.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Listen on this address instead of the configured one
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}

/// Mock documents `aviator generate` can print.
#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Controllers, logs, threats and system status
    Dashboard,

    /// Current speed and altitude
    Flight,

    /// Surveillance detections
    Surveillance,

    /// A 50-point GPS cluster around a base coordinate
    Gps {
        /// Base latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Base longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

/// Arguments for `aviator geocode`.
#[derive(Debug, Args)]
pub struct GeocodeCommand {
    /// Free-text address to look up
    pub address: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
