//! Non-fatal validation of monitored date fields in an import batch.
//!
//! The classifier silently treats unparseable dates as no-data; this pass
//! exists so an import surface can tell the operator which cells will be
//! ignored. It never blocks an import.

use serde::{Deserialize, Serialize};

use certwatch_core::dates;
use certwatch_core::monitor::MonitorMap;
use certwatch_core::record::Record;

/// What is wrong with a monitored cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The value does not parse as a date and will be ignored.
    UnparseableDate,
    /// The monitored field is missing from the record entirely.
    MissingField,
}

/// One flagged cell in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIssue {
    /// Row index in the batch.
    pub row: usize,
    /// Category label of the monitored field.
    pub label: String,
    /// Field name on the record.
    pub field: String,
    pub kind: IssueKind,
    /// The offending raw value, for `UnparseableDate`.
    pub value: Option<String>,
}

/// Lint a batch against a monitor map.
///
/// Missing fields are reported too, since a whole column absent from an
/// upload usually means a renamed header rather than genuinely empty data.
pub fn validate_records(records: &[Record], monitor_map: &MonitorMap) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    for (row, record) in records.iter().enumerate() {
        for entry in monitor_map.iter() {
            match record.get(&entry.field) {
                None => issues.push(RecordIssue {
                    row,
                    label: entry.label.clone(),
                    field: entry.field.clone(),
                    kind: IssueKind::MissingField,
                    value: None,
                }),
                Some(raw) => {
                    if !raw.trim().is_empty() && dates::parse_date(raw).is_none() {
                        issues.push(RecordIssue {
                            row,
                            label: entry.label.clone(),
                            field: entry.field.clone(),
                            kind: IssueKind::UnparseableDate,
                            value: Some(raw.to_string()),
                        });
                    }
                }
            }
        }
    }
    issues
}
