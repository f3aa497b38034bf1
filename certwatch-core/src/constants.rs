/// Certwatch workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default red (expired) threshold in days.
pub const DEFAULT_RED_LIMIT_DAYS: i64 = 0;

/// Default yellow (expiring soon) threshold in days.
pub const DEFAULT_YELLOW_LIMIT_DAYS: i64 = 30;
