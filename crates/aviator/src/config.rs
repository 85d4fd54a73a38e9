//! Configuration management for aviator.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "aviator";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "AVIATOR_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AVIATOR_`, sections split by `__`)
/// 2. TOML config file at `~/.config/aviator/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Geocoding relay configuration.
    pub geocoding: GeocodingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the dashboard API listens on.
    pub bind_address: String,
}

/// Geocoding relay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible service; `/search` is appended.
    pub base_url: String,
    /// User-Agent sent with every lookup. Nominatim's usage policy requires
    /// one that identifies the application.
    pub user_agent: String,
    /// Upper bound on a single lookup, in seconds.
    pub timeout_secs: u64,
    /// Number of candidates requested from the service. Only the first is
    /// relayed.
    pub result_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "CyberMindAviator/1.0 (dev@example.com)".to_string(),
            timeout_secs: 5,
            result_limit: 1,
        }
    }
}

impl GeocodingConfig {
    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

impl Config {
    /// Load configuration from all sources, reading the TOML layer from
    /// `config_path` or the default location when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if the
    /// resulting configuration does not validate.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.bind_address()?;

        let base_url = &self.geocoding.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config_validation(format!(
                "geocoding base_url must be an http(s) URL: {base_url}"
            )));
        }

        if self.geocoding.user_agent.trim().is_empty() {
            return Err(Error::config_validation(
                "geocoding user_agent must not be empty",
            ));
        }

        if self.geocoding.timeout_secs == 0 {
            return Err(Error::config_validation(
                "geocoding timeout_secs must be greater than 0",
            ));
        }

        if self.geocoding.result_limit == 0 {
            return Err(Error::config_validation(
                "geocoding result_limit must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not a valid `host:port` socket address.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        self.server.bind_address.parse().map_err(|_| {
            Error::config_validation(format!(
                "invalid bind_address: {}",
                self.server.bind_address
            ))
        })
    }
}
