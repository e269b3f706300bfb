//! TOML-based application configuration.
//!
//! Stores:
//! - Refresh period for the mode driver
//! - An optional custom gate list replacing the builtins
//!
//! Configuration is stored at `~/.config/bushgate/config.toml`. The
//! `BUSHGATE_CONFIG_DIR` environment variable overrides the directory,
//! which tests use to stay isolated.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::gates::{builtin_gates, Gate};

fn default_period_secs() -> u64 {
    60
}

/// Mode refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between classifier re-evaluations. Clamped to at least 1.
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            period_secs: default_period_secs(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/bushgate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub refresh: RefreshConfig,
    /// Custom gate list. When empty, the builtin gates are used.
    #[serde(default)]
    pub gates: Vec<Gate>,
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("BUSHGATE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("bushgate"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Persist to the default location, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let wrap = |source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(wrap)
    }

    /// The gate list in effect: custom gates when configured, otherwise the
    /// builtins.
    pub fn effective_gates(&self) -> Vec<Gate> {
        if self.gates.is_empty() {
            builtin_gates()
        } else {
            self.gates.clone()
        }
    }

    /// Refresh period in milliseconds, clamped to at least one second.
    pub fn period_ms(&self) -> u64 {
        self.refresh.period_secs.max(1) * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh.period_secs, 60);
        assert_eq!(config.period_ms(), 60_000);
        assert!(config.gates.is_empty());
        assert_eq!(config.effective_gates().len(), 3);
    }

    #[test]
    fn test_period_clamped() {
        let config = Config {
            refresh: RefreshConfig { period_secs: 0 },
            gates: Vec::new(),
        };
        assert_eq!(config.period_ms(), 1000);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.refresh.period_secs, 60);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.refresh.period_secs = 15;
        config.gates.push(Gate {
            name: "Test Gate".into(),
            note: "note".into(),
            lat: -28.0,
            lon: 31.5,
        });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.refresh.period_secs, 15);
        assert_eq!(loaded.gates.len(), 1);
        assert_eq!(loaded.effective_gates()[0].name, "Test Gate");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [[gates]]
            name = "Side Gate"
            lat = -28.2
            lon = 31.7
            "#,
        )
        .unwrap();
        assert_eq!(config.refresh.period_secs, 60);
        assert_eq!(config.gates[0].note, "");
        assert_eq!(config.effective_gates().len(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(toml::from_str::<Config>("refresh = 12").is_err());
    }
}
