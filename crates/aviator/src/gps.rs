//! Synthetic GPS clusters for the GPS console.
//!
//! A cluster is a fixed-size batch of readings scattered tightly around a base
//! coordinate, imitating the jitter of a receiver holding position.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Number of points in every cluster.
pub const CLUSTER_SIZE: usize = 50;

/// Maximum offset from the base coordinate, in degrees, on each axis.
pub const JITTER_DEGREES: f64 = 0.0005;

const ALTITUDE_RANGE: RangeInclusive<f64> = 190.0..=200.0;
const ACCURACY_RANGE: RangeInclusive<f64> = 1.5..=5.0;
const ID_BASE_RANGE: RangeInclusive<usize> = 1000..=9999;

/// Fix quality reported for a synthetic reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixQuality {
    /// Sub-metre agreement between satellites.
    Excellent,
    /// Usable for navigation.
    Good,
    /// Marginal.
    Acceptable,
}

impl FixQuality {
    /// Every quality label, for uniform selection.
    pub const ALL: [Self; 3] = [Self::Excellent, Self::Good, Self::Acceptable];
}

/// A single synthetic reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    /// Display identifier, `#NNNN`. Not unique across calls.
    pub id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Altitude with unit, e.g. `"195.3m"`.
    pub alt: String,
    /// Horizontal accuracy, e.g. `"±2.41m"`.
    pub acc: String,
    /// Fix quality label.
    pub quality: FixQuality,
}

/// Body of a cluster request. Either coordinate may arrive as a JSON number
/// or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterRequest {
    /// Base latitude.
    #[serde(default)]
    pub lat: Option<Value>,
    /// Base longitude.
    #[serde(default)]
    pub lon: Option<Value>,
}

impl ClusterRequest {
    /// Resolve the base coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] if either coordinate is missing,
    /// non-numeric, or not finite.
    pub fn base(&self) -> Result<(f64, f64), ApiError> {
        let lat = parse_coordinate(self.lat.as_ref())?;
        let lon = parse_coordinate(self.lon.as_ref())?;
        Ok((lat, lon))
    }
}

fn parse_coordinate(value: Option<&Value>) -> Result<f64, ApiError> {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|coordinate| coordinate.is_finite())
        .ok_or(ApiError::InvalidInput)
}

/// Generate a cluster of [`CLUSTER_SIZE`] points around `(lat, lon)`.
pub fn synthesize_cluster<R: Rng + ?Sized>(rng: &mut R, lat: f64, lon: f64) -> Vec<GpsPoint> {
    (0..CLUSTER_SIZE)
        .map(|index| {
            let id_base = rng.gen_range(ID_BASE_RANGE);
            let quality = *FixQuality::ALL
                .choose(rng)
                .unwrap_or(&FixQuality::Acceptable);
            GpsPoint {
                id: format!("#{}", id_base + index),
                lat: lat + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
                lon: lon + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
                alt: format!("{:.1}m", rng.gen_range(ALTITUDE_RANGE)),
                acc: format!("±{:.2}m", rng.gen_range(ACCURACY_RANGE)),
                quality,
            }
        })
        .collect()
}

/// Validate a request and generate its cluster.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] if the base coordinate is unusable.
pub fn cluster_for<R: Rng + ?Sized>(
    rng: &mut R,
    request: &ClusterRequest,
) -> Result<Vec<GpsPoint>, ApiError> {
    let (lat, lon) = request.base()?;
    Ok(synthesize_cluster(rng, lat, lon))
}
