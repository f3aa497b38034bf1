//! Date parsing for raw field values.
//!
//! The engine never errors on a bad date: parsing has exactly two
//! outcomes, a calendar date or no-data. Upstream spreadsheets carry
//! dates in a handful of formats, sometimes with a time-of-day suffix.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats accepted, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%Y.%m.%d"];

/// Datetime formats accepted; the time component is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a raw field value into a calendar date.
///
/// Returns `None` for anything that does not match a known format —
/// "unparseable" and "absent" are deliberately indistinguishable to
/// consumers.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}
