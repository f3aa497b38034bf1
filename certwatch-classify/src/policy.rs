//! Bucket rule: where an offset lands relative to the two band edges.
//!
//! Default policy: `min < red_limit` → RED, `red_limit <= min <= yellow_limit`
//! → YELLOW, otherwise GREEN. The `<` vs `<=` at each edge is configurable
//! via [`BoundaryPolicy`].

use certwatch_core::bucket::Bucket;
use certwatch_core::config::{BoundaryPolicy, Thresholds};

/// Bucket a minimum offset against the thresholds under the given policy.
pub fn bucket_for(min_offset: i64, thresholds: &Thresholds, policy: &BoundaryPolicy) -> Bucket {
    if policy.red_edge.admits(min_offset, thresholds.red_limit) {
        Bucket::Red
    } else if policy.yellow_edge.admits(min_offset, thresholds.yellow_limit) {
        Bucket::Yellow
    } else {
        Bucket::Green
    }
}

/// Whether an individual category offset counts as a warning contributor.
///
/// Independent of the record's own bucket, which depends solely on the
/// minimum offset.
pub fn is_warning(offset: i64, thresholds: &Thresholds, policy: &BoundaryPolicy) -> bool {
    policy.yellow_edge.admits(offset, thresholds.yellow_limit)
}
