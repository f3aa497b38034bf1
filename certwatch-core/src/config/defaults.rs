//! Default configuration values.

use crate::constants;

/// Default red (expired) threshold in days.
pub const DEFAULT_RED_LIMIT_DAYS: i64 = constants::DEFAULT_RED_LIMIT_DAYS;

/// Default yellow (expiring soon) threshold in days.
pub const DEFAULT_YELLOW_LIMIT_DAYS: i64 = constants::DEFAULT_YELLOW_LIMIT_DAYS;
