//! Last-known-position tracking.
//!
//! The position source (a geolocation watch on the original page) delivers
//! fixes and failures asynchronously. `PositionTracker` owns the last fix
//! and the current status; the "center on me" style of action reads the fix
//! through [`PositionTracker::last`] instead of an ambient global.
//!
//! All failures here are non-fatal: a continuous watch retries implicitly,
//! so the tracker just records what the source last said.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// A single GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub lat: f64,
    pub lon: f64,
    /// Estimated accuracy radius in meters.
    pub accuracy_m: f64,
    pub at: DateTime<Utc>,
}

/// What the position source last reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GeoStatus {
    /// No report yet.
    Waiting,
    /// Healthy watch with a recent fix.
    Ok { accuracy_m: f64 },
    /// User or platform denied location access.
    PermissionDenied,
    /// Host has no geolocation capability.
    Unsupported,
}

impl GeoStatus {
    /// One-line status text for the display sink.
    pub fn status_line(&self) -> String {
        match self {
            GeoStatus::Waiting => "Waiting for GPS fix...".to_string(),
            GeoStatus::Ok { accuracy_m } => {
                format!("GPS OK - accuracy ~{}m", accuracy_m.round() as i64)
            }
            GeoStatus::PermissionDenied => {
                "Location blocked. Allow location access for this app, then retry.".to_string()
            }
            GeoStatus::Unsupported => "GPS not supported on this device.".to_string(),
        }
    }
}

/// Owns the last-known fix and the watch status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionTracker {
    last: Option<GeoFix>,
    status: GeoStatus,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    pub fn new() -> Self {
        Self {
            last: None,
            status: GeoStatus::Waiting,
        }
    }

    /// Record a fresh fix from the position source.
    pub fn record(&mut self, fix: GeoFix) -> Event {
        self.last = Some(fix);
        self.status = GeoStatus::Ok {
            accuracy_m: fix.accuracy_m,
        };
        Event::PositionUpdated {
            lat: fix.lat,
            lon: fix.lon,
            accuracy_m: fix.accuracy_m,
            at: fix.at,
        }
    }

    /// Record a failure report. The last fix is kept; a stale position is
    /// still useful for centering the view.
    pub fn fail(&mut self, status: GeoStatus) -> Event {
        self.status = status;
        Event::PositionLost {
            status,
            at: Utc::now(),
        }
    }

    /// The last recorded fix, if any.
    pub fn last(&self) -> Option<&GeoFix> {
        self.last.as_ref()
    }

    pub fn status(&self) -> GeoStatus {
        self.status
    }

    pub fn status_line(&self) -> String {
        self.status.status_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(lat: f64, lon: f64, accuracy_m: f64) -> GeoFix {
        GeoFix {
            lat,
            lon,
            accuracy_m,
            at: Utc::now(),
        }
    }

    #[test]
    fn test_tracker_starts_waiting() {
        let tracker = PositionTracker::new();
        assert_eq!(tracker.last(), None);
        assert_eq!(tracker.status(), GeoStatus::Waiting);
        assert_eq!(tracker.status_line(), "Waiting for GPS fix...");
    }

    #[test]
    fn test_record_updates_last_and_status() {
        let mut tracker = PositionTracker::new();
        let event = tracker.record(fix(-28.1, 31.8, 12.4));
        assert!(matches!(event, Event::PositionUpdated { .. }));
        let last = tracker.last().unwrap();
        assert_eq!(last.lat, -28.1);
        assert_eq!(last.lon, 31.8);
        assert_eq!(tracker.status(), GeoStatus::Ok { accuracy_m: 12.4 });
        assert_eq!(tracker.status_line(), "GPS OK - accuracy ~12m");
    }

    #[test]
    fn test_failure_keeps_last_fix() {
        let mut tracker = PositionTracker::new();
        tracker.record(fix(-28.1, 31.8, 5.0));
        let event = tracker.fail(GeoStatus::PermissionDenied);
        assert!(matches!(
            event,
            Event::PositionLost { status: GeoStatus::PermissionDenied, .. }
        ));
        assert!(tracker.last().is_some());
        assert_eq!(tracker.status(), GeoStatus::PermissionDenied);
        assert!(tracker.status_line().starts_with("Location blocked"));
    }

    #[test]
    fn test_newer_fix_replaces_older() {
        let mut tracker = PositionTracker::new();
        tracker.record(fix(-28.1, 31.8, 5.0));
        tracker.record(fix(-28.2, 31.9, 8.0));
        assert_eq!(tracker.last().unwrap().lat, -28.2);
        assert_eq!(tracker.status(), GeoStatus::Ok { accuracy_m: 8.0 });
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            GeoStatus::Unsupported.status_line(),
            "GPS not supported on this device."
        );
        assert_eq!(
            GeoStatus::Ok { accuracy_m: 37.6 }.status_line(),
            "GPS OK - accuracy ~38m"
        );
    }
}
