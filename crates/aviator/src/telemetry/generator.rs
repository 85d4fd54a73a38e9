//! Random telemetry generators.
//!
//! Each generator takes the random source explicitly so tests can drive it
//! with a seeded RNG; handlers pass `rand::thread_rng()`.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use super::clock_now;
use super::models::{
    Controller, ControllerStatus, DashboardData, FlightParameters, LogEntry, SurveillanceObject,
    SystemStatus, ThreatEntry,
};

pub(crate) const CONNECTION_RANGE: RangeInclusive<u8> = 85..=98;
pub(crate) const ALERT_RANGE: RangeInclusive<u8> = 1..=5;
pub(crate) const ACCURACY_RANGE: RangeInclusive<f64> = 84.0..=99.9;
pub(crate) const RESPONSE_TIME_RANGE: RangeInclusive<f64> = 2.0..=25.0;
pub(crate) const SCAN_OCTET_RANGE: RangeInclusive<u8> = 10..=200;
pub(crate) const SPEED_RANGE: RangeInclusive<f64> = 0.0..=60.0;
pub(crate) const ALTITUDE_RANGE: RangeInclusive<f64> = 150.0..=500.0;

const GPS_STATUS: &str = "STRONG";

/// Controllers at these leading positions are reported as active.
const ACTIVE_CONTROLLERS: usize = 2;

/// (name, category) of every controller on the panel, in display order.
pub(crate) const CONTROLLER_CATALOG: [(&str, &str); 5] = [
    ("Neural Pilot Alpha", "Primary Navigation"),
    ("Precision Navigator", "GPS Coordination"),
    ("Threat Detection AI", "Security Monitor"),
    ("Weather Adaptive", "Environmental"),
    ("Emergency Override", "Manual Backup"),
];

#[derive(Debug, Clone, Copy)]
pub(crate) struct LogTemplate {
    pub time: &'static str,
    pub kind: &'static str,
    pub source: &'static str,
    pub message: &'static str,
    pub status: &'static str,
}

pub(crate) const LOG_CATALOG: [LogTemplate; 3] = [
    LogTemplate {
        time: "18:11:41",
        kind: "Real-time system update",
        source: "Precision Navigator",
        message: "Automated system check completed.",
        status: "COMPLETED",
    },
    LogTemplate {
        time: "09:21:45",
        kind: "Controller handover initiated",
        source: "Neural Pilot Alpha",
        message: "Switching to AI Autopilot.",
        status: "COMPLETED",
    },
    LogTemplate {
        time: "09:19:15",
        kind: "Cyber Threat Detected",
        source: "Cyber Threat Monitor",
        message: "GPS Spoofing attack mitigated.",
        status: "ACTIVE",
    },
];
const LOG_COUNT: RangeInclusive<usize> = 2..=3;

/// Placeholder replaced with a random last octet of the scanning host.
const OCTET_PLACEHOLDER: &str = "{octet}";

#[derive(Debug, Clone, Copy)]
pub(crate) struct ThreatTemplate {
    pub kind: &'static str,
    pub details: &'static str,
    pub status: &'static str,
    pub confidence: u8,
}

pub(crate) const THREAT_CATALOG: [ThreatTemplate; 3] = [
    ThreatTemplate {
        kind: "GPS Spoofing Detected",
        details: "Suspicious GPS signals detected...",
        status: "ACTIVE",
        confidence: 87,
    },
    ThreatTemplate {
        kind: "Communication Jamming",
        details: "Intermittent signal interference detected...",
        status: "MONITORING",
        confidence: 64,
    },
    ThreatTemplate {
        kind: "Network Scan Attempt",
        details: "Unauthorized scan from 192.168.1.{octet} blocked.",
        status: "BLOCKED",
        confidence: 92,
    },
];
const THREAT_COUNT: RangeInclusive<usize> = 1..=2;

/// (class, confidence, x, y) of every object the camera can report.
pub(crate) const SURVEILLANCE_CATALOG: [(&str, f64, f64, f64); 2] = [
    ("Vehicle", 89.8, 0.3, 0.4),
    ("Personnel", 89.7, 0.7, 0.6),
];
const SURVEILLANCE_COUNT: RangeInclusive<usize> = 1..=2;

/// Random subset of `pool` with a size drawn from `count`, in random order.
fn sample<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[T],
    count: RangeInclusive<usize>,
) -> Vec<T> {
    let amount = rng.gen_range(count).min(pool.len());
    let mut items = pool.to_vec();
    let (picked, _) = items.partial_shuffle(rng, amount);
    picked.to_vec()
}

/// Generate the status bar summary.
pub fn system_status<R: Rng + ?Sized>(rng: &mut R) -> SystemStatus {
    SystemStatus {
        connection: rng.gen_range(CONNECTION_RANGE),
        system_time: clock_now(),
        gps_status: GPS_STATUS.to_string(),
        emergency_alerts: rng.gen_range(ALERT_RANGE),
    }
}

/// Generate the full controller panel.
///
/// Always returns every catalog entry in catalog order; the first two are
/// active.
pub fn controllers<R: Rng + ?Sized>(rng: &mut R) -> Vec<Controller> {
    let last_update = clock_now();
    CONTROLLER_CATALOG
        .iter()
        .enumerate()
        .map(|(index, (name, kind))| Controller {
            name: (*name).to_string(),
            kind: (*kind).to_string(),
            status: if index < ACTIVE_CONTROLLERS {
                ControllerStatus::Active
            } else {
                ControllerStatus::Standby
            },
            accuracy: format!("{:.2}%", rng.gen_range(ACCURACY_RANGE)),
            response_time: format!("{:.2}ms", rng.gen_range(RESPONSE_TIME_RANGE)),
            last_update: last_update.clone(),
        })
        .collect()
}

/// Generate two or three co-drive log entries.
pub fn co_drive_logs<R: Rng + ?Sized>(rng: &mut R) -> Vec<LogEntry> {
    sample(rng, &LOG_CATALOG, LOG_COUNT)
        .into_iter()
        .map(|template| LogEntry {
            time: template.time.to_string(),
            kind: template.kind.to_string(),
            source: template.source.to_string(),
            message: template.message.to_string(),
            status: template.status.to_string(),
        })
        .collect()
}

/// Generate one or two cyber-threat alerts.
pub fn cyber_threats<R: Rng + ?Sized>(rng: &mut R) -> Vec<ThreatEntry> {
    let octet = rng.gen_range(SCAN_OCTET_RANGE);
    sample(rng, &THREAT_CATALOG, THREAT_COUNT)
        .into_iter()
        .map(|template| ThreatEntry {
            kind: template.kind.to_string(),
            details: template
                .details
                .replace(OCTET_PLACEHOLDER, &octet.to_string()),
            status: template.status.to_string(),
            confidence: template.confidence,
        })
        .collect()
}

/// Generate one or two surveillance detections.
pub fn surveillance_objects<R: Rng + ?Sized>(rng: &mut R) -> Vec<SurveillanceObject> {
    sample(rng, &SURVEILLANCE_CATALOG, SURVEILLANCE_COUNT)
        .into_iter()
        .map(|(kind, confidence, x, y)| SurveillanceObject {
            kind: kind.to_string(),
            confidence,
            x,
            y,
        })
        .collect()
}

/// Generate the current speed and altitude.
pub fn flight_parameters<R: Rng + ?Sized>(rng: &mut R) -> FlightParameters {
    FlightParameters {
        speed: format!("{:.1}", rng.gen_range(SPEED_RANGE)),
        altitude: format!("{:.1}", rng.gen_range(ALTITUDE_RANGE)),
    }
}

/// Assemble the main dashboard document.
pub fn dashboard_data<R: Rng + ?Sized>(rng: &mut R) -> DashboardData {
    DashboardData {
        controllers: controllers(rng),
        co_drive_logs: co_drive_logs(rng),
        cyber_threats: cyber_threats(rng),
        system_status: system_status(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROUNDS: u64 = 200;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Parse `"<number><suffix>"` and check it has `decimals` fractional digits.
    fn parse_formatted(value: &str, suffix: &str, decimals: usize) -> f64 {
        let number = value
            .strip_suffix(suffix)
            .unwrap_or_else(|| panic!("{value:?} should end with {suffix:?}"));
        let (_, fraction) = number
            .split_once('.')
            .unwrap_or_else(|| panic!("{value:?} should have a decimal point"));
        assert_eq!(fraction.len(), decimals, "precision of {value:?}");
        number.parse().unwrap()
    }

    fn is_clock(value: &str) -> bool {
        chrono::NaiveTime::parse_from_str(value, "%H:%M:%S").is_ok()
    }

    #[test]
    fn test_system_status_ranges() {
        for seed in 0..ROUNDS {
            let status = system_status(&mut seeded(seed));
            assert!(CONNECTION_RANGE.contains(&status.connection));
            assert!(ALERT_RANGE.contains(&status.emergency_alerts));
            assert_eq!(status.gps_status, "STRONG");
            assert!(is_clock(&status.system_time));
        }
    }

    #[test]
    fn test_controllers_layout() {
        for seed in 0..ROUNDS {
            let panel = controllers(&mut seeded(seed));
            assert_eq!(panel.len(), 5);
            for (index, controller) in panel.iter().enumerate() {
                let expected = if index < 2 {
                    ControllerStatus::Active
                } else {
                    ControllerStatus::Standby
                };
                assert_eq!(controller.status, expected);
                assert_eq!(controller.name, CONTROLLER_CATALOG[index].0);
                assert_eq!(controller.kind, CONTROLLER_CATALOG[index].1);
            }
        }
    }

    #[test]
    fn test_controller_formatting_and_ranges() {
        for seed in 0..ROUNDS {
            for controller in controllers(&mut seeded(seed)) {
                let accuracy = parse_formatted(&controller.accuracy, "%", 2);
                assert!((84.0..=99.9).contains(&accuracy), "{accuracy}");

                let response = parse_formatted(&controller.response_time, "ms", 2);
                assert!((2.0..=25.0).contains(&response), "{response}");

                assert!(is_clock(&controller.last_update));
            }
        }
    }

    #[test]
    fn test_logs_subset_bounds() {
        let mut seen_sizes = std::collections::HashSet::new();
        for seed in 0..ROUNDS {
            let logs = co_drive_logs(&mut seeded(seed));
            assert!((2..=3).contains(&logs.len()));
            seen_sizes.insert(logs.len());

            for entry in &logs {
                assert!(LOG_CATALOG
                    .iter()
                    .any(|t| t.kind == entry.kind && t.message == entry.message));
            }
            // no duplicates
            let mut kinds: Vec<_> = logs.iter().map(|e| e.kind.as_str()).collect();
            kinds.sort_unstable();
            kinds.dedup();
            assert_eq!(kinds.len(), logs.len());
        }
        assert_eq!(seen_sizes.len(), 2);
    }

    #[test]
    fn test_threats_subset_bounds() {
        for seed in 0..ROUNDS {
            let threats = cyber_threats(&mut seeded(seed));
            assert!((1..=2).contains(&threats.len()));

            for threat in &threats {
                let template = THREAT_CATALOG
                    .iter()
                    .find(|t| t.kind == threat.kind)
                    .expect("threat drawn from catalog");
                assert_eq!(threat.status, template.status);
                assert_eq!(threat.confidence, template.confidence);
                assert!(threat.confidence <= 100);
                assert!(!threat.details.contains(OCTET_PLACEHOLDER));
            }
        }
    }

    #[test]
    fn test_network_scan_octet_range() {
        let mut scans = 0;
        for seed in 0..ROUNDS {
            for threat in cyber_threats(&mut seeded(seed)) {
                if threat.kind != "Network Scan Attempt" {
                    continue;
                }
                scans += 1;
                let octet: u8 = threat
                    .details
                    .strip_prefix("Unauthorized scan from 192.168.1.")
                    .and_then(|rest| rest.strip_suffix(" blocked."))
                    .unwrap()
                    .parse()
                    .unwrap();
                assert!(SCAN_OCTET_RANGE.contains(&octet));
            }
        }
        assert!(scans > 0);
    }

    #[test]
    fn test_surveillance_subset_bounds() {
        for seed in 0..ROUNDS {
            let objects = surveillance_objects(&mut seeded(seed));
            assert!((1..=2).contains(&objects.len()));
            for object in &objects {
                assert!(SURVEILLANCE_CATALOG.iter().any(|c| c.0 == object.kind));
                assert!((0.0..=1.0).contains(&object.x));
                assert!((0.0..=1.0).contains(&object.y));
                assert!((0.0..=100.0).contains(&object.confidence));
            }
        }
    }

    #[test]
    fn test_flight_parameters_ranges() {
        for seed in 0..ROUNDS {
            let params = flight_parameters(&mut seeded(seed));
            let speed = parse_formatted(&params.speed, "", 1);
            let altitude = parse_formatted(&params.altitude, "", 1);
            assert!((0.0..=60.0).contains(&speed), "{speed}");
            assert!((150.0..=500.0).contains(&altitude), "{altitude}");
        }
    }

    #[test]
    fn test_dashboard_data_assembles_panels() {
        let data = dashboard_data(&mut seeded(7));
        assert_eq!(data.controllers.len(), 5);
        assert!(!data.co_drive_logs.is_empty());
        assert!(!data.cyber_threats.is_empty());

        let value = serde_json::to_value(&data).unwrap();
        for key in ["controllers", "co_drive_logs", "cyber_threats", "system_status"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_sample_respects_small_pool() {
        let picked = sample(&mut seeded(1), &[1, 2], 3..=5);
        assert_eq!(picked.len(), 2);
    }
}
