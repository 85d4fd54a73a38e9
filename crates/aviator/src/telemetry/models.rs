//! Shapes returned by the telemetry endpoints.
//!
//! Field names follow the JSON the dashboard front-end reads, hence the
//! `type` renames.

use serde::{Deserialize, Serialize};

/// Activity state of a flight controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControllerStatus {
    /// Currently in command.
    Active,
    /// Ready to take over.
    Standby,
}

impl std::fmt::Display for ControllerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Standby => write!(f, "STANDBY"),
        }
    }
}

/// Overall link and alert summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Connection quality, percent.
    pub connection: u8,
    /// Local wall-clock time, `HH:MM:SS`.
    pub system_time: String,
    /// GPS lock descriptor.
    pub gps_status: String,
    /// Number of active emergency alerts.
    pub emergency_alerts: u8,
}

/// One entry of the controller panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controller {
    /// Display name.
    pub name: String,
    /// Functional category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Activity state.
    pub status: ControllerStatus,
    /// Accuracy, e.g. `"97.12%"`.
    pub accuracy: String,
    /// Response latency, e.g. `"4.51ms"`.
    pub response_time: String,
    /// Time of the last update, `HH:MM:SS`.
    pub last_update: String,
}

/// A co-drive panel log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Event time, `HH:MM:SS`.
    pub time: String,
    /// Event type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Originating subsystem.
    pub source: String,
    /// Free-text message.
    pub message: String,
    /// Status tag.
    pub status: String,
}

/// A cyber-threat alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatEntry {
    /// Threat category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text details.
    pub details: String,
    /// Status tag.
    pub status: String,
    /// Confidence score, 0 to 100.
    pub confidence: u8,
}

/// An object picked up by the surveillance camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveillanceObject {
    /// Detected object class.
    #[serde(rename = "type")]
    pub kind: String,
    /// Detection confidence, percent.
    pub confidence: f64,
    /// Normalized horizontal position in the frame.
    pub x: f64,
    /// Normalized vertical position in the frame.
    pub y: f64,
}

/// Current speed and altitude, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightParameters {
    /// Speed, one decimal place.
    pub speed: String,
    /// Altitude, one decimal place.
    pub altitude: String,
}

/// Everything the main dashboard polls for in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Controller panel.
    pub controllers: Vec<Controller>,
    /// Co-drive log panel.
    pub co_drive_logs: Vec<LogEntry>,
    /// Threat panel.
    pub cyber_threats: Vec<ThreatEntry>,
    /// Status bar.
    pub system_status: SystemStatus,
}
