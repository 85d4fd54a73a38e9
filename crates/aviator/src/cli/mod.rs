//! Command-line interface for aviator.
//!
//! This module provides the CLI structure for the `aviator` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, GenerateCommand, GeocodeCommand, ServeCommand};

use crate::config::Config;
use crate::logging::Verbosity;

/// aviator - Dashboard backend for the aviator control console
///
/// Serves mock controller, threat, flight and GPS telemetry to the dashboard
/// and relays address lookups to a geocoding service.
#[derive(Debug, Parser)]
#[command(name = "aviator")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the dashboard API server
    Serve(ServeCommand),

    /// Print one freshly generated mock document as JSON
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Look up an address through the geocoding relay
    Geocode(GeocodeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Configuration file in effect: `--config` if given, else the default.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_config_path)
    }
}
