//! Configuration types for the certwatch workspace.

pub mod defaults;

mod thresholds;
mod watch_config;

pub use thresholds::{BoundaryPolicy, Comparison, Thresholds};
pub use watch_config::{NamedMonitorMap, WatchConfig};
