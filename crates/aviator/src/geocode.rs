//! Geocoding relay.
//!
//! Forwards a free-text address to a Nominatim-compatible search endpoint and
//! relays the first match's coordinates. One request per call: no retries, no
//! caching.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::error::{ApiError, Result};

/// A resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Ways a lookup can fail once an address has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The service answered with an empty result list.
    #[error("no match")]
    NotFound,

    /// Transport failure, timeout, non-success status or unreadable body.
    #[error("{0}")]
    Relay(String),

    /// The service answered but the first match could not be used.
    #[error("{0}")]
    Unexpected(String),
}

impl From<GeocodeError> for ApiError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound => Self::NotFound,
            GeocodeError::Relay(message) => Self::RelayFailure(message),
            GeocodeError::Unexpected(message) => Self::UnexpectedFailure(message),
        }
    }
}

/// Something that can turn an address into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + fmt::Debug {
    /// Look up `address` and return the best match.
    ///
    /// # Errors
    ///
    /// See [`GeocodeError`].
    async fn geocode(&self, address: &str) -> std::result::Result<Coordinates, GeocodeError>;
}

/// Validate `address` and relay it through `geocoder`.
///
/// # Errors
///
/// [`ApiError::MissingInput`] for an absent or empty address; otherwise the
/// geocoder's failure mapped onto [`ApiError`]. The address is forwarded as
/// given, surrounding whitespace included.
pub async fn relay(
    geocoder: &dyn Geocoder,
    address: Option<&str>,
) -> std::result::Result<Coordinates, ApiError> {
    let address = address
        .filter(|address| !address.is_empty())
        .ok_or(ApiError::MissingInput)?;

    match geocoder.geocode(address).await {
        Ok(coordinates) => {
            debug!(address, lat = coordinates.lat, lon = coordinates.lon, "geocoded");
            Ok(coordinates)
        }
        Err(err) => {
            warn!(address, error = %err, "geocoding failed");
            Err(err.into())
        }
    }
}

/// Body of a geocode request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeRequest {
    /// Free-text address. Non-string values are treated as absent.
    #[serde(default)]
    pub address: Option<Value>,
}

impl GeocodeRequest {
    /// The address text, if one was supplied as a string.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_ref().and_then(Value::as_str)
    }
}

/// [`Geocoder`] backed by a Nominatim search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    search_url: String,
    limit: u32,
}

impl NominatimClient {
    /// Build a client from configuration.
    ///
    /// The configured timeout bounds the whole request; expiry surfaces as a
    /// relay failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            search_url: config.search_url(),
            limit: config.result_limit,
        })
    }

    /// The search endpoint this client queries.
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> std::result::Result<Coordinates, GeocodeError> {
        let limit = self.limit.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", address), ("format", "json"), ("limit", limit.as_str())])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| GeocodeError::Relay(error_chain(&e)))?;

        let places: Vec<Value> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Relay(error_chain(&e)))?;

        let first = places.first().ok_or(GeocodeError::NotFound)?;
        Ok(Coordinates {
            lat: place_coordinate(first, "lat")?,
            lon: place_coordinate(first, "lon")?,
        })
    }
}

/// Render `err` followed by each of its sources, joined with `": "`.
///
/// reqwest's own `Display` omits the cause (refused connection, timeout).
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Read one coordinate of a search result. Nominatim encodes them as strings.
fn place_coordinate(place: &Value, key: &str) -> std::result::Result<f64, GeocodeError> {
    match place.get(key) {
        Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|e| {
            GeocodeError::Unexpected(format!("could not convert {key} {text:?} to float: {e}"))
        }),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| GeocodeError::Unexpected(format!("{key} out of range: {number}"))),
        Some(other) => Err(GeocodeError::Unexpected(format!(
            "unexpected {key} value: {other}"
        ))),
        None => Err(GeocodeError::Unexpected(format!(
            "result has no '{key}' field"
        ))),
    }
}
