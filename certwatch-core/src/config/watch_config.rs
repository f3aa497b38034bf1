use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::monitor::MonitorMap;

use super::thresholds::{BoundaryPolicy, Thresholds};

/// A monitor map under a table name (e.g. "vehicles", "personnel").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedMonitorMap {
    pub name: String,
    pub map: MonitorMap,
}

/// Top-level certwatch configuration.
///
/// Loadable from TOML; every section falls back to defaults, so an empty
/// file is a valid config with no monitor maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub thresholds: Thresholds,
    pub boundary: BoundaryPolicy,
    pub monitors: Vec<NamedMonitorMap>,
}

impl WatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Find a monitor map by table name.
    pub fn monitor_for(&self, name: &str) -> Option<&MonitorMap> {
        self.monitors
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.map)
    }
}
