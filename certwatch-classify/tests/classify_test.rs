use certwatch_classify::ClassifierEngine;
use certwatch_core::bucket::Bucket;
use certwatch_core::config::Thresholds;
use certwatch_core::monitor::MonitorMap;
use test_fixtures::{date, record_expiring_in, record_of, vehicle_monitor_map};

fn engine() -> ClassifierEngine {
    ClassifierEngine::new(Thresholds::new(0, 30))
}

// ── Boundary behavior at the default thresholds ──────────────────────────

#[test]
fn boundaries_at_default_thresholds() {
    let engine = engine();
    let map = vehicle_monitor_map();
    let today = date(2024, 6, 1);

    let cases = [
        (-1, Bucket::Red),
        (0, Bucket::Yellow),
        (30, Bucket::Yellow),
        (31, Bucket::Green),
    ];
    for (offset, expected) in cases {
        let record = record_expiring_in("insurance_expiry", today, offset);
        let result = engine.classify_record(&record, &map, today);
        assert_eq!(
            result.bucket, expected,
            "offset {} should be {:?}",
            offset, expected
        );
        assert_eq!(result.min_offset, Some(offset));
    }
}

// ── Minimum-wins across fields ───────────────────────────────────────────

#[test]
fn minimum_offset_drives_the_bucket() {
    let engine = engine();
    let map = MonitorMap::from_pairs([
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
        ("gray_card", "gray_card_expiry"),
    ]);
    let today = date(2024, 6, 1);

    // Offsets 5, -3, 40: the -3 drives RED regardless of field order.
    let record = record_of([
        ("insurance_expiry", "2024-06-06"),
        ("inspection_expiry", "2024-05-29"),
        ("gray_card_expiry", "2024-07-11"),
    ]);
    let result = engine.classify_record(&record, &map, today);
    assert_eq!(result.bucket, Bucket::Red);
    assert_eq!(result.min_offset, Some(-3));

    // Same values, reversed map order: same bucket.
    let reversed = MonitorMap::from_pairs([
        ("gray_card", "gray_card_expiry"),
        ("inspection", "inspection_expiry"),
        ("insurance", "insurance_expiry"),
    ]);
    let result = engine.classify_record(&record, &reversed, today);
    assert_eq!(result.bucket, Bucket::Red);
    assert_eq!(result.min_offset, Some(-3));
}

// ── No-data policy ───────────────────────────────────────────────────────

#[test]
fn record_with_no_monitored_fields_is_green() {
    let engine = engine();
    let map = vehicle_monitor_map();
    let today = date(2024, 6, 1);

    let record = record_of([("plate", "RC-101"), ("owner", "Diallo")]);
    let result = engine.classify_record(&record, &map, today);

    assert_eq!(result.bucket, Bucket::Green);
    assert_eq!(result.min_offset, None);
    assert!(result.offsets.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn unparseable_date_degrades_to_absent() {
    let engine = engine();
    let map = MonitorMap::from_pairs([
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
    ]);
    let today = date(2024, 6, 1);

    // One garbage field, one valid date 100 days out: classify on the
    // valid field only.
    let record = record_of([
        ("insurance_expiry", "renewal pending"),
        ("inspection_expiry", "2024-09-09"),
    ]);
    let result = engine.classify_record(&record, &map, today);
    assert_eq!(result.bucket, Bucket::Green);
    assert_eq!(result.min_offset, Some(100));
    assert_eq!(result.offsets.len(), 1);
}

// ── Category warnings are independent of the bucket ──────────────────────

#[test]
fn every_offset_inside_window_contributes_a_warning() {
    let engine = engine();
    let map = MonitorMap::from_pairs([
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
    ]);
    let today = date(2024, 6, 1);

    // Offsets 10 and 25: bucket YELLOW (min = 10), both categories warn.
    let record = record_of([
        ("insurance_expiry", "2024-06-11"),
        ("inspection_expiry", "2024-06-26"),
    ]);
    let result = engine.classify_record(&record, &map, today);
    assert_eq!(result.bucket, Bucket::Yellow);
    assert_eq!(result.warnings, vec!["insurance", "inspection"]);
}

// ── Determinism and non-mutation ─────────────────────────────────────────

#[test]
fn classification_is_deterministic_and_does_not_mutate() {
    let engine = engine();
    let map = vehicle_monitor_map();
    let today = date(2024, 6, 1);

    let record = record_of([
        ("insurance_expiry", "2024-06-11"),
        ("inspection_expiry", "not-a-date"),
    ]);
    let before = record.clone();

    let first = engine.classify_record(&record, &map, today);
    let second = engine.classify_record(&record, &map, today);

    assert_eq!(first, second);
    assert_eq!(record, before);
}

// ── Row status derivation ────────────────────────────────────────────────

#[test]
fn row_status_names_the_driving_category() {
    let engine = engine();
    let map = MonitorMap::from_pairs([
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
    ]);
    let today = date(2024, 6, 1);

    let record = record_of([
        ("insurance_expiry", "2024-06-26"),
        ("inspection_expiry", "2024-06-06"),
    ]);
    let status = engine.row_status(&record, &map, today);
    assert_eq!(status.bucket, Bucket::Yellow);
    let driver = status.driver.expect("non-green row has a driver");
    assert_eq!(driver.label, "inspection");
    assert_eq!(driver.days_remaining, 5);
}

#[test]
fn row_status_tie_goes_to_map_order() {
    let engine = engine();
    let map = MonitorMap::from_pairs([
        ("insurance", "insurance_expiry"),
        ("inspection", "inspection_expiry"),
    ]);
    let today = date(2024, 6, 1);

    // Both fields expire the same day.
    let record = record_of([
        ("inspection_expiry", "2024-06-06"),
        ("insurance_expiry", "2024-06-06"),
    ]);
    let status = engine.row_status(&record, &map, today);
    let driver = status.driver.expect("non-green row has a driver");
    assert_eq!(driver.label, "insurance");
}

#[test]
fn row_status_for_green_row_has_no_driver() {
    let engine = engine();
    let map = vehicle_monitor_map();
    let today = date(2024, 6, 1);

    let record = record_of([("insurance_expiry", "2099-01-01")]);
    let status = engine.row_status(&record, &map, today);
    assert_eq!(status.bucket, Bucket::Green);
    assert!(status.driver.is_none());
}
