//! Shared fixture builders for certwatch tests.
//!
//! Provides the two monitor maps the original deployment shipped (vehicle
//! and personnel document tables) plus small record/date helpers used by
//! integration tests across crates.

use chrono::NaiveDate;

use certwatch_core::monitor::MonitorMap;
use certwatch_core::record::Record;

/// The vehicle document monitor map.
pub fn vehicle_monitor_map() -> MonitorMap {
    MonitorMap::from_pairs([
        ("gray_card", "gray_card_expiry"),
        ("no_lien", "no_lien_expiry"),
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
        ("tinted_window", "tinted_window_expiry"),
    ])
}

/// The personnel document monitor map.
pub fn personnel_monitor_map() -> MonitorMap {
    MonitorMap::from_pairs([
        ("passport", "passport_expiry"),
        ("id_card", "id_card_expiry"),
        ("visa", "visa_expiry"),
        ("work_permit", "work_permit_expiry"),
        ("residence_permit", "residence_permit_expiry"),
        ("driver_license", "driver_license_expiry"),
    ])
}

/// Build a record from `(field, value)` pairs.
pub fn record_of<const N: usize>(pairs: [(&str, &str); N]) -> Record {
    Record::from_pairs(pairs)
}

/// Shorthand for a calendar date.
///
/// # Panics
/// Panics on an invalid calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap_or_else(|| panic!("invalid fixture date {y:04}-{m:02}-{d:02}"))
}

/// A record whose single monitored field expires `offset` days after `today`.
pub fn record_expiring_in(field: &str, today: NaiveDate, offset: i64) -> Record {
    let expiry = today + chrono::Duration::days(offset);
    Record::from_pairs([(field, expiry.format("%Y-%m-%d").to_string())])
}
