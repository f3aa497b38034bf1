//! Per-record offset collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use certwatch_core::dates;
use certwatch_core::monitor::MonitorMap;
use certwatch_core::record::Record;

/// One computed day-offset: the monitored category and the signed number
/// of days between its date and the reference date. Negative means
/// already past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOffset {
    pub label: String,
    pub offset_days: i64,
}

/// Collect the labeled offsets for one record, in monitor-map order.
///
/// Fields that are absent or fail date parsing are skipped — both mean
/// "no data for this category", never an error. The returned sequence may
/// be empty.
pub fn collect(record: &Record, monitor_map: &MonitorMap, today: NaiveDate) -> Vec<LabeledOffset> {
    monitor_map
        .iter()
        .filter_map(|entry| {
            let raw = record.get(&entry.field)?;
            let date = dates::parse_date(raw)?;
            Some(LabeledOffset {
                label: entry.label.clone(),
                offset_days: (date - today).num_days(),
            })
        })
        .collect()
}
