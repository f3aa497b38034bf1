//! Monitor maps: which record fields are watched, under which category label.

use serde::{Deserialize, Serialize};

/// One monitored category: a display label and the record field holding
/// that category's expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorEntry {
    /// Category label used in reporting (e.g. "insurance", "passport").
    pub label: String,
    /// Name of the record field holding the date value.
    pub field: String,
}

/// Ordered mapping from category label to date field name.
///
/// Order matters for reporting (category tallies come back in map order)
/// and for tie-breaks when two fields share the minimum offset; it never
/// changes a record's bucket. The map is kind-agnostic: vehicle and
/// personnel tables just use different maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorMap {
    entries: Vec<MonitorEntry>,
}

impl MonitorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(label, field)` pairs, preserving order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, field)| MonitorEntry {
                    label: label.into(),
                    field: field.into(),
                })
                .collect(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, field: impl Into<String>) {
        self.entries.push(MonitorEntry {
            label: label.into(),
            field: field.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonitorEntry> {
        self.entries.iter()
    }

    /// Category labels in map order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
