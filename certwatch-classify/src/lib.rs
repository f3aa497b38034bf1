//! # certwatch-classify
//!
//! The expiry classification and aggregation engine: turns a table of
//! records with heterogeneous date columns into per-record red/yellow/green
//! buckets and fleet-wide counts.
//!
//! The engine is a pure function of its explicit inputs. The reference
//! date is always caller-supplied and never read from a live clock, so
//! identical inputs always produce identical results.

pub mod engine;
pub mod offsets;
pub mod policy;
pub mod stats;
pub mod status;

pub use engine::{Classification, ClassifierEngine};
pub use offsets::LabeledOffset;
pub use stats::{AggregateStats, CategoryCount};
pub use status::{RowStatus, StatusDriver};
