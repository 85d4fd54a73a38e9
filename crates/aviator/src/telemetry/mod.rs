//! Mock telemetry for the dashboard.
//!
//! Every value here is synthetic: generators draw from fixed catalogs and
//! ranges on each call, and nothing is kept between calls.

mod generator;
mod models;

pub use generator::{
    co_drive_logs, controllers, cyber_threats, dashboard_data, flight_parameters,
    surveillance_objects, system_status,
};
pub use models::{
    Controller, ControllerStatus, DashboardData, FlightParameters, LogEntry, SurveillanceObject,
    SystemStatus, ThreatEntry,
};

/// Wall-clock format used for every timestamp the dashboard shows.
pub(crate) const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Current local time as `HH:MM:SS`.
pub(crate) fn clock_now() -> String {
    chrono::Local::now().format(CLOCK_FORMAT).to_string()
}
