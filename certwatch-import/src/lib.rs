//! # certwatch-import
//!
//! Bulk-import support for record tables: key-based deduplication when
//! merging an uploaded batch into an existing table, and a non-fatal
//! validation pass that flags unparseable date values for the importer
//! to surface.

pub mod dedup;
pub mod validate;

pub use dedup::{merge_import, DedupPolicy, ImportOutcome};
pub use validate::{validate_records, IssueKind, RecordIssue};
