//! HTTP surface of the dashboard backend.
//!
//! Maps the dashboard's polling endpoints onto the telemetry generators, the
//! GPS synthesizer and the geocoding relay. Pages and static assets are served
//! elsewhere.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geocode::{Geocoder, NominatimClient};

/// Shared, immutable state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Backend used by `/api/geocode`.
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create state around an existing geocoder.
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    /// Create state with a Nominatim client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = NominatimClient::new(&config.geocoding)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/dashboard_data", get(handlers::dashboard_data))
        .route("/api/generate_gps_points", post(handlers::generate_gps_points))
        .route("/api/geocode", post(handlers::geocode))
        .route("/api/surveillance_data", get(handlers::surveillance_data))
        .route("/api/flight_parameters", get(handlers::flight_parameters))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind {
            address: addr.to_string(),
            source,
        })?;
    info!("aviator API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("aviator API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
