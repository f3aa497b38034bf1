//! Fleet-wide aggregate statistics, folded from per-record classifications.

use serde::{Deserialize, Serialize};

use certwatch_core::bucket::Bucket;
use certwatch_core::monitor::MonitorMap;

use crate::engine::Classification;

/// Warning count for one monitored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    /// Number of records where this category contributed a warning.
    pub count: usize,
}

/// Aggregate counts across a table of records.
///
/// Invariant: `red + yellow + green == total`. Category counts are
/// independent per-category tallies and may sum to more than
/// `red + yellow` — one record can warn on several categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: usize,
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
    /// Per-category warning counts, in monitor-map order.
    pub categories: Vec<CategoryCount>,
}

impl AggregateStats {
    /// Fold per-record classifications into aggregate counts.
    ///
    /// Every classification lands in exactly one bucket, so `total` always
    /// equals the number of inputs. A record adds at most one unit to each
    /// category it warns on.
    pub fn fold<'a>(
        monitor_map: &MonitorMap,
        classifications: impl IntoIterator<Item = &'a Classification>,
    ) -> Self {
        let mut stats = Self {
            total: 0,
            red: 0,
            yellow: 0,
            green: 0,
            categories: monitor_map
                .labels()
                .map(|label| CategoryCount {
                    label: label.to_string(),
                    count: 0,
                })
                .collect(),
        };

        for classification in classifications {
            stats.total += 1;
            match classification.bucket {
                Bucket::Red => stats.red += 1,
                Bucket::Yellow => stats.yellow += 1,
                Bucket::Green => stats.green += 1,
            }
            for category in &mut stats.categories {
                if classification.warnings.iter().any(|w| *w == category.label) {
                    category.count += 1;
                }
            }
        }
        stats
    }

    /// Records needing attention: expired plus expiring soon.
    pub fn anomaly_count(&self) -> usize {
        self.red + self.yellow
    }

    /// Warning count for a category label, if it is monitored.
    pub fn warning_count(&self, label: &str) -> Option<usize> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
    }
}
