//! # certwatch-core
//!
//! Foundation crate for the certwatch expiry monitoring workspace.
//! Defines the record model, monitor maps, thresholds, buckets, date
//! parsing, config, errors, and constants. Every other crate in the
//! workspace depends on this.

pub mod bucket;
pub mod config;
pub mod constants;
pub mod dates;
pub mod errors;
pub mod monitor;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use bucket::Bucket;
pub use config::{BoundaryPolicy, Comparison, Thresholds, WatchConfig};
pub use errors::{ClassifyError, ConfigError, ImportError, WatchError, WatchResult};
pub use monitor::{MonitorEntry, MonitorMap};
pub use record::Record;
pub use traits::IRecordSource;
