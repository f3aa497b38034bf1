//! Per-domain error enums plus the workspace-wide umbrella.
//!
//! Per-field anomalies (missing field, unparseable date) are never errors;
//! these enums cover structural precondition violations only.

mod classify_error;
mod config_error;
mod import_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use import_error::ImportError;

/// Umbrella error for cross-crate call sites.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Workspace-wide result alias.
pub type WatchResult<T> = Result<T, WatchError>;
