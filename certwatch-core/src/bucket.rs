//! Urgency buckets for classified records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The urgency classification assigned to a record.
///
/// Ordered by urgency: `Green < Yellow < Red`, so sorting a table by
/// bucket descending puts expired records first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// All monitored dates are safely in the future (or no dates at all).
    Green,
    /// At least one monitored date falls within the warning window.
    Yellow,
    /// At least one monitored date is past the red threshold.
    Red,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Red => "red",
            Bucket::Yellow => "yellow",
            Bucket::Green => "green",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
