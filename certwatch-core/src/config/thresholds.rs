use serde::{Deserialize, Serialize};

use super::defaults;

/// Warning thresholds in days.
///
/// Contract: `red_limit <= yellow_limit`. The engine does not validate
/// this; a misconfigured pair yields an empty or inverted YELLOW band,
/// which is the caller's problem to avoid. Keeping this a documented
/// precondition keeps classification a total function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Offsets at or below this edge (per `BoundaryPolicy`) are RED.
    pub red_limit: i64,
    /// Offsets at or below this edge (per `BoundaryPolicy`) are at most YELLOW.
    pub yellow_limit: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            red_limit: defaults::DEFAULT_RED_LIMIT_DAYS,
            yellow_limit: defaults::DEFAULT_YELLOW_LIMIT_DAYS,
        }
    }
}

impl Thresholds {
    pub fn new(red_limit: i64, yellow_limit: i64) -> Self {
        Self {
            red_limit,
            yellow_limit,
        }
    }
}

/// How an offset compares against a band edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Strict `<`: the edge value itself is outside the band.
    Strict,
    /// `<=`: the edge value itself is inside the band.
    Inclusive,
}

impl Comparison {
    /// Whether `value` falls at or inside this band edge.
    pub fn admits(&self, value: i64, edge: i64) -> bool {
        match self {
            Comparison::Strict => value < edge,
            Comparison::Inclusive => value <= edge,
        }
    }
}

/// The `<` vs `<=` choice at each band edge.
///
/// Revisions of the source system disagreed on the exact operators, so the
/// edges are policy rather than constants. The default is the majority
/// behavior: `min < red_limit` is RED, `min <= yellow_limit` is YELLOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryPolicy {
    /// Comparison against `red_limit`.
    pub red_edge: Comparison,
    /// Comparison against `yellow_limit`.
    pub yellow_edge: Comparison,
}

impl Default for BoundaryPolicy {
    fn default() -> Self {
        Self {
            red_edge: Comparison::Strict,
            yellow_edge: Comparison::Inclusive,
        }
    }
}
