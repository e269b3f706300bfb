//! Core error types for bushgate-core.
//!
//! Errors are split by concern: configuration I/O, input validation, and
//! generic IO/JSON wrappers for callers that bubble everything through
//! [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bushgate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the config file
    #[error("Failed to write config at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing failed
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    /// No platform config directory available
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Validation errors for user- or caller-supplied values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Minutes-since-midnight outside `0..1440`
    #[error("minutes since midnight out of range: {0} (expected 0..1440)")]
    MinutesOutOfRange(i64),

    /// Hour/minute pair that is not a valid wall-clock reading
    #[error("invalid clock reading {hour:02}:{minute:02}")]
    InvalidClock { hour: u32, minute: u32 },

    /// Unparseable `HH:MM` string
    #[error("invalid time format '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// Latitude outside `-90..=90`
    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `-180..=180`
    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),

    /// Gate with an empty display name
    #[error("gate name must not be empty")]
    EmptyGateName,

    /// Gate lookup that matched nothing
    #[error("no gate matches '{0}'")]
    UnknownGate(String),
}
