//! Key-based deduplication when merging an import batch into a table.

use serde::{Deserialize, Serialize};
use tracing::info;

use certwatch_core::errors::{ImportError, WatchResult};
use certwatch_core::record::Record;

/// Which record wins when two share the same key value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// A later record replaces an earlier one — a re-import refreshes the row.
    KeepLast,
    /// The first occurrence sticks; later duplicates are dropped.
    KeepFirst,
}

impl Default for DedupPolicy {
    fn default() -> Self {
        DedupPolicy::KeepLast
    }
}

/// Result of a merge: the deduplicated table plus what happened to the
/// incoming batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub records: Vec<Record>,
    /// Incoming records appended under a new key.
    pub added: usize,
    /// Incoming records that replaced (or were dropped against) an
    /// existing key, per the policy.
    pub deduplicated: usize,
    /// Records with no key field at all, kept as-is.
    pub passed_through: usize,
}

/// Merge `incoming` into `existing`, deduplicating on the value of
/// `key_field`.
///
/// Records missing the key field are never dropped; they pass through in
/// order. Existing table order is preserved; replaced rows keep their
/// original position. Fails only on an empty key field name.
pub fn merge_import(
    existing: &[Record],
    incoming: &[Record],
    key_field: &str,
    policy: DedupPolicy,
) -> WatchResult<ImportOutcome> {
    if key_field.is_empty() {
        return Err(ImportError::EmptyKeyField.into());
    }

    let mut records: Vec<Record> = existing.to_vec();
    let mut added = 0;
    let mut deduplicated = 0;
    let mut passed_through = 0;

    for record in incoming {
        let key = match record.get(key_field) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => {
                records.push(record.clone());
                passed_through += 1;
                continue;
            }
        };

        let position = records
            .iter()
            .position(|r| r.get(key_field) == Some(key.as_str()));
        match (position, policy) {
            (Some(index), DedupPolicy::KeepLast) => {
                records[index] = record.clone();
                deduplicated += 1;
            }
            (Some(_), DedupPolicy::KeepFirst) => {
                deduplicated += 1;
            }
            (None, _) => {
                records.push(record.clone());
                added += 1;
            }
        }
    }

    info!(
        key_field,
        added, deduplicated, passed_through, "import batch merged"
    );
    Ok(ImportOutcome {
        records,
        added,
        deduplicated,
        passed_through,
    })
}
