//! Park gate directory.
//!
//! Gates are named entry points with coordinates and a short note. The
//! builtin list covers Hluhluwe-iMfolozi; a custom list can be supplied via
//! the config file.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named park entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub name: String,
    /// Short descriptive note shown under the name.
    #[serde(default)]
    pub note: String,
    pub lat: f64,
    pub lon: f64,
}

impl Gate {
    /// Create a validated gate.
    pub fn new(
        name: impl Into<String>,
        note: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Result<Self, ValidationError> {
        let gate = Self {
            name: name.into(),
            note: note.into(),
            lat,
            lon,
        };
        gate.validate()?;
        Ok(gate)
    }

    /// Check name and coordinate ranges. Deserialized gates (config file)
    /// go through this before use.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyGateName);
        }
        if !self.lat.is_finite() || self.lat.abs() > 90.0 {
            return Err(ValidationError::LatitudeOutOfRange(self.lat));
        }
        if !self.lon.is_finite() || self.lon.abs() > 180.0 {
            return Err(ValidationError::LongitudeOutOfRange(self.lon));
        }
        Ok(())
    }
}

/// The builtin gate list for Hluhluwe-iMfolozi Park.
pub fn builtin_gates() -> Vec<Gate> {
    vec![
        Gate {
            name: "Nyalazi Gate (Imfolozi)".into(),
            note: "Best Big 5 odds (open terrain).".into(),
            lat: -28.007222,
            lon: 31.685833,
        },
        Gate {
            name: "Memorial Gate (Hluhluwe)".into(),
            note: "Good alternative, scenic hills.".into(),
            lat: -28.2198,
            lon: 31.9519,
        },
        Gate {
            name: "Cengeni Gate (West)".into(),
            note: "Often used from Ulundi side.".into(),
            lat: -28.341667,
            lon: 31.705556,
        },
    ]
}

/// Axis-aligned bounding box over a gate list.
///
/// This is the data a map surface needs to frame all gates; the core only
/// computes the box, it does not render anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateBounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GateBounds {
    /// Bounds over `gates`, or `None` for an empty list.
    pub fn of(gates: &[Gate]) -> Option<Self> {
        let first = gates.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for gate in &gates[1..] {
            bounds.min_lat = bounds.min_lat.min(gate.lat);
            bounds.min_lon = bounds.min_lon.min(gate.lon);
            bounds.max_lat = bounds.max_lat.max(gate.lat);
            bounds.max_lon = bounds.max_lon.max(gate.lon);
        }
        Some(bounds)
    }

    /// Grow the box by `factor` of its span on every side (the usual map
    /// framing margin; 0.2 matches the original page).
    pub fn padded(self, factor: f64) -> Self {
        let lat_pad = (self.max_lat - self.min_lat) * factor;
        let lon_pad = (self.max_lon - self.min_lon) * factor;
        Self {
            min_lat: self.min_lat - lat_pad,
            min_lon: self.min_lon - lon_pad,
            max_lat: self.max_lat + lat_pad,
            max_lon: self.max_lon + lon_pad,
        }
    }

    /// Midpoint of the box.
    pub fn center(self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

/// Look up a gate by 1-based index or case-insensitive name prefix.
pub fn find_gate<'a>(gates: &'a [Gate], query: &str) -> Result<&'a Gate, ValidationError> {
    if let Ok(index) = query.parse::<usize>() {
        if index >= 1 {
            if let Some(gate) = gates.get(index - 1) {
                return Ok(gate);
            }
        }
        return Err(ValidationError::UnknownGate(query.to_string()));
    }
    let needle = query.to_lowercase();
    gates
        .iter()
        .find(|g| g.name.to_lowercase().starts_with(&needle))
        .ok_or_else(|| ValidationError::UnknownGate(query.to_string()))
}
