//! Time-of-day drive-mode classification.
//!
//! A game drive looks very different at 06:30 and at 13:00. This module maps
//! a wall-clock time to one of four named drive modes, each carrying a short
//! label and an advisory tip for the visitor.
//!
//! The window table uses closed intervals checked in priority order, with
//! [`DriveMode::General`] as the fallback. The minutes between windows
//! (09:31-09:59, 14:31-15:29, and everything outside 06:00-17:30) fall to
//! `General` rather than to an adjacent window. The table intentionally
//! preserves those gaps; do not merge them into the neighbouring windows.

mod refresh;

pub use refresh::{RefreshDriver, DEFAULT_REFRESH_PERIOD_MS};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A wall-clock time expressed as minutes since local midnight.
///
/// The invariant `0 <= minutes < 1440` is enforced at construction, which
/// keeps [`classify`] total: every valid `TimeOfDay` maps to exactly one
/// [`DriveMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Create a `TimeOfDay` from minutes since midnight.
    ///
    /// Rejects values `>= 1440`. Callers doing their own arithmetic that may
    /// cross midnight should use [`TimeOfDay::wrapping`] instead.
    pub fn new(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::MinutesOutOfRange(minutes as i64));
        }
        Ok(Self(minutes))
    }

    /// Create a `TimeOfDay` by normalizing an arbitrary minute count into
    /// `0..1440` (Euclidean remainder, so negatives wrap backwards from
    /// midnight).
    pub fn wrapping(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY as i64) as u16)
    }

    /// Create a `TimeOfDay` from an hour/minute clock reading.
    pub fn from_clock(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour >= 24 || minute >= 60 {
            return Err(ValidationError::InvalidClock { hour, minute });
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Extract the time of day from a local timestamp.
    pub fn from_local(at: &DateTime<Local>) -> Self {
        Self((at.hour() * 60 + at.minute()) as u16)
    }

    /// The current local time of day.
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    /// Minutes since midnight, `0..1440`.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Clock hour, `0..24`.
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Clock minute, `0..60`.
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Parse a `HH:MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::InvalidTimeFormat(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        let hour: u32 = h.parse().map_err(|_| bad())?;
        let minute: u32 = m.parse().map_err(|_| bad())?;
        Self::from_clock(hour, minute).map_err(|_| bad())
    }
}

/// A named time-of-day drive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveMode {
    Prime,
    Midday,
    Afternoon,
    General,
}

impl DriveMode {
    /// Short display label for the mode.
    pub fn label(self) -> &'static str {
        match self {
            DriveMode::Prime => "PRIME DRIVE (06:00-09:30)",
            DriveMode::Midday => "MIDDAY MODE (10:00-14:30)",
            DriveMode::Afternoon => "AFTERNOON DRIVE (15:30-17:30)",
            DriveMode::General => "GENERAL MODE",
        }
    }

    /// Advisory tip shown alongside the label.
    pub fn tip(self) -> &'static str {
        match self {
            DriveMode::Prime => {
                "Predators most active. Drive slow (20-30 km/h), scan shade and road edges."
            }
            DriveMode::Midday => {
                "Predators resting. Focus waterholes, elephants, rhino, buffalo."
            }
            DriveMode::Afternoon => {
                "Movement increases again. Re-check hot roads and scan crossings."
            }
            DriveMode::General => {
                "Still good - just manage expectations outside prime times."
            }
        }
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed interval of minutes mapped to a drive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeWindow {
    /// First minute of the window (inclusive).
    pub start: u16,
    /// Last minute of the window (inclusive).
    pub end: u16,
    pub mode: DriveMode,
}

impl ModeWindow {
    fn contains(self, minutes: u16) -> bool {
        self.start <= minutes && minutes <= self.end
    }

    /// Inclusive span of the window in minutes.
    pub fn span_min(self) -> u16 {
        self.end - self.start + 1
    }
}

/// The drive-mode window table, in priority order. First match wins;
/// anything unmatched is [`DriveMode::General`].
pub const WINDOWS: [ModeWindow; 3] = [
    ModeWindow {
        start: 360,
        end: 570,
        mode: DriveMode::Prime,
    },
    ModeWindow {
        start: 600,
        end: 870,
        mode: DriveMode::Midday,
    },
    ModeWindow {
        start: 930,
        end: 1050,
        mode: DriveMode::Afternoon,
    },
];

/// Map a time of day to its drive mode.
///
/// Pure and total: no allocation, no failure, exactly one mode per input.
pub fn classify(time: TimeOfDay) -> DriveMode {
    let minutes = time.minutes();
    for window in WINDOWS {
        if window.contains(minutes) {
            return window.mode;
        }
    }
    DriveMode::General
}
