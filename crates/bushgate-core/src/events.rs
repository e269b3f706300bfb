use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mode::DriveMode;
use crate::position::GeoStatus;

/// State changes produced by the core.
///
/// The display sink (CLI today) consumes these and renders them as text or
/// JSON lines; nothing else in the system reacts to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Periodic re-evaluation produced the same mode as before (or the
    /// first evaluation).
    ModeRefreshed {
        mode: DriveMode,
        minutes: u16,
        at: DateTime<Utc>,
    },
    /// Periodic re-evaluation crossed a window boundary.
    ModeChanged {
        from: DriveMode,
        to: DriveMode,
        minutes: u16,
        at: DateTime<Utc>,
    },
    /// A new GPS fix was recorded.
    PositionUpdated {
        lat: f64,
        lon: f64,
        accuracy_m: f64,
        at: DateTime<Utc>,
    },
    /// The position source reported a non-fatal failure.
    PositionLost {
        status: GeoStatus,
        at: DateTime<Utc>,
    },
}
