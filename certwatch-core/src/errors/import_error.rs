/// Bulk-import errors.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("dedup key field name is empty")]
    EmptyKeyField,
}
