//! Seam traits for external collaborators.

use crate::errors::WatchResult;
use crate::record::Record;

/// A tabular data source yielding records.
///
/// The engine does not care whether rows come from a spreadsheet, a
/// database, or an in-memory list; it only needs the materialized table.
pub trait IRecordSource {
    fn records(&self) -> WatchResult<Vec<Record>>;
}

impl IRecordSource for Vec<Record> {
    fn records(&self) -> WatchResult<Vec<Record>> {
        Ok(self.clone())
    }
}

impl IRecordSource for &[Record] {
    fn records(&self) -> WatchResult<Vec<Record>> {
        Ok(self.to_vec())
    }
}
