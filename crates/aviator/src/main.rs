//! `aviator` - CLI for the aviator dashboard backend
//!
//! Runs the API server and offers offline access to the mock generators and
//! the geocoding relay.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use aviator::cli::{Cli, Command, ConfigCommand, GenerateCommand, GeocodeCommand, ServeCommand};
use aviator::geocode::{self, NominatimClient};
use aviator::{gps, init_logging, telemetry, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config_path = cli.config_path();
    let config = Config::load_from(Some(config_path.clone())).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(&config, &serve_cmd).await,
        Command::Generate(generate_cmd) => handle_generate(&generate_cmd),
        Command::Geocode(geocode_cmd) => handle_geocode(&config, &geocode_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, &config_path, config_cmd),
    }
}

async fn handle_serve(config: &Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    let addr = match cmd.bind {
        Some(addr) => addr,
        None => config.bind_address()?,
    };
    let state = AppState::from_config(config)?;
    aviator::serve(addr, state).await?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_generate(cmd: &GenerateCommand) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    match cmd {
        GenerateCommand::Dashboard => print_json(&telemetry::dashboard_data(&mut rng)),
        GenerateCommand::Flight => print_json(&telemetry::flight_parameters(&mut rng)),
        GenerateCommand::Surveillance => print_json(&telemetry::surveillance_objects(&mut rng)),
        GenerateCommand::Gps { lat, lon } => {
            if !(lat.is_finite() && lon.is_finite()) {
                anyhow::bail!("lat and lon must be finite numbers");
            }
            print_json(&gps::synthesize_cluster(&mut rng, *lat, *lon))
        }
    }
}

async fn handle_geocode(config: &Config, cmd: &GeocodeCommand) -> anyhow::Result<()> {
    let client = NominatimClient::new(&config.geocoding)?;
    match geocode::relay(&client, Some(cmd.address.as_str())).await {
        Ok(coordinates) => print_json(&coordinates),
        Err(err) => {
            print_json(&serde_json::json!({ "error": err.to_string() }))?;
            anyhow::bail!("lookup failed with status {}", err.status())
        }
    }
}

fn handle_config(config: &Config, config_path: &Path, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                print_json(config)?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind address:   {}", config.server.bind_address);
                println!();
                println!("[Geocoding]");
                println!("  Base URL:       {}", config.geocoding.base_url);
                println!("  User agent:     {}", config.geocoding.user_agent);
                println!("  Timeout (s):    {}", config.geocoding.timeout_secs);
                println!("  Result limit:   {}", config.geocoding.result_limit);
            }
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(|| config_path.to_path_buf());
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
