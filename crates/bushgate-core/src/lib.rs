//! # Bushgate Core Library
//!
//! Core logic for Bushgate, a game-drive companion for safari-park visitors.
//! The CLI binary is a thin display layer over this library.
//!
//! ## Architecture
//!
//! - **Mode Classifier**: a pure, total mapping from time of day to a named
//!   drive mode with an advisory tip
//! - **Refresh Driver**: wall-clock based re-evaluation; no internal thread,
//!   the caller invokes `tick()` periodically
//! - **Gate Directory**: park entry points with coordinates, notes, and
//!   bounding-box framing data
//! - **Deep Links**: driving-direction URLs for Apple Maps and Google Maps
//! - **Position Tracker**: owned last-known GPS fix and watch status
//! - **Config**: TOML configuration for refresh period and custom gates
//!
//! ## Key Components
//!
//! - [`classify`] / [`DriveMode`]: the time-of-day classifier
//! - [`RefreshDriver`]: periodic re-evaluation engine
//! - [`Gate`] / [`builtin_gates`]: the gate directory
//! - [`Config`]: application configuration management

pub mod checklist;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod events;
pub mod gates;
pub mod mode;
pub mod position;

pub use checklist::checklist_items;
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use gates::{builtin_gates, find_gate, Gate, GateBounds};
pub use mode::{classify, DriveMode, ModeWindow, RefreshDriver, TimeOfDay, WINDOWS};
pub use position::{GeoFix, GeoStatus, PositionTracker};
