//! `aviator` - backend for the aviator control dashboard
//!
//! Generates mock telemetry for the dashboard's panels, synthesizes GPS
//! clusters, and relays address lookups to a Nominatim geocoding service.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod geocode;
pub mod gps;
pub mod logging;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use geocode::{Coordinates, Geocoder, NominatimClient};
pub use gps::GpsPoint;
pub use logging::init_logging;
pub use server::{router, serve, AppState};
