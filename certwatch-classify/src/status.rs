//! Per-row status derivation: the record's bucket plus the category
//! driving it, for a status column in a table view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use certwatch_core::bucket::Bucket;
use certwatch_core::monitor::MonitorMap;
use certwatch_core::record::Record;

use crate::engine::ClassifierEngine;

/// The category responsible for a non-green status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDriver {
    pub label: String,
    /// Signed days until that category's date; negative means already past.
    pub days_remaining: i64,
}

/// One row's derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStatus {
    pub bucket: Bucket,
    /// Present for non-green rows: the category holding the minimum
    /// offset. Ties go to the earliest entry in monitor-map order.
    pub driver: Option<StatusDriver>,
}

impl ClassifierEngine {
    /// Derive the status label for one row.
    pub fn row_status(
        &self,
        record: &Record,
        monitor_map: &MonitorMap,
        today: NaiveDate,
    ) -> RowStatus {
        let classification = self.classify_record(record, monitor_map, today);

        let driver = match (classification.bucket, classification.min_offset) {
            (Bucket::Green, _) | (_, None) => None,
            (_, Some(min)) => classification
                .offsets
                .iter()
                .find(|o| o.offset_days == min)
                .map(|o| StatusDriver {
                    label: o.label.clone(),
                    days_remaining: o.offset_days,
                }),
        };

        RowStatus {
            bucket: classification.bucket,
            driver,
        }
    }
}
