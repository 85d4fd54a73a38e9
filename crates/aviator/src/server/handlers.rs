//! Route handlers for the dashboard API.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::de::DeserializeOwned;

use super::AppState;
use crate::error::ApiError;
use crate::geocode::{self, Coordinates, GeocodeRequest};
use crate::gps::{self, ClusterRequest, GpsPoint};
use crate::telemetry::{self, DashboardData, FlightParameters, SurveillanceObject};

/// Decode a POST body. A missing or malformed body decodes to `T::default()`
/// so the endpoint reports its own input error in the usual JSON shape.
fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn dashboard_data() -> Json<DashboardData> {
    Json(telemetry::dashboard_data(&mut rand::thread_rng()))
}

pub async fn surveillance_data() -> Json<Vec<SurveillanceObject>> {
    Json(telemetry::surveillance_objects(&mut rand::thread_rng()))
}

pub async fn flight_parameters() -> Json<FlightParameters> {
    Json(telemetry::flight_parameters(&mut rand::thread_rng()))
}

pub async fn generate_gps_points(body: Bytes) -> Result<Json<Vec<GpsPoint>>, ApiError> {
    let request: ClusterRequest = decode_body(&body);
    let points = gps::cluster_for(&mut rand::thread_rng(), &request)?;
    Ok(Json(points))
}

pub async fn geocode(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Coordinates>, ApiError> {
    let request: GeocodeRequest = decode_body(&body);
    let coordinates = geocode::relay(state.geocoder.as_ref(), request.address()).await?;
    Ok(Json(coordinates))
}
