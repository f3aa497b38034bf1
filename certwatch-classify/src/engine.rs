//! ClassifierEngine — classify one record, aggregate many.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use certwatch_core::bucket::Bucket;
use certwatch_core::config::{BoundaryPolicy, Thresholds};
use certwatch_core::errors::{ClassifyError, WatchResult};
use certwatch_core::monitor::MonitorMap;
use certwatch_core::record::Record;
use certwatch_core::traits::IRecordSource;

use crate::offsets::{self, LabeledOffset};
use crate::policy;
use crate::stats::AggregateStats;

/// Per-record classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub bucket: Bucket,
    /// Minimum offset across monitored fields; `None` when no monitored
    /// field held a parseable date (the record is GREEN by definition,
    /// but callers can still tell "no data" from "safe data").
    pub min_offset: Option<i64>,
    /// Every offset that was computed, in monitor-map order.
    pub offsets: Vec<LabeledOffset>,
    /// Labels whose individual offset fell inside the warning window.
    /// Feeds the aggregate category tally; does not affect `bucket`.
    pub warnings: Vec<String>,
}

/// Expiry classification engine.
///
/// Holds thresholds and boundary policy; the reference date is a per-call
/// parameter so the engine never touches a clock.
pub struct ClassifierEngine {
    thresholds: Thresholds,
    boundary: BoundaryPolicy,
}

impl ClassifierEngine {
    /// Create an engine with the given thresholds and the default
    /// boundary policy.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Override the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn boundary(&self) -> &BoundaryPolicy {
        &self.boundary
    }

    /// Classify a single record against the monitor map.
    ///
    /// Absent and unparseable fields are skipped. A record with no
    /// computable offset is GREEN with no warnings — an entity with zero
    /// tracked documents is never flagged. Otherwise the minimum offset
    /// alone decides the bucket, while every offset inside the warning
    /// window marks its category as a contributor.
    pub fn classify_record(
        &self,
        record: &Record,
        monitor_map: &MonitorMap,
        today: NaiveDate,
    ) -> Classification {
        let offsets = offsets::collect(record, monitor_map, today);

        let min_offset = offsets.iter().map(|o| o.offset_days).min();
        let bucket = match min_offset {
            None => Bucket::Green,
            Some(min) => policy::bucket_for(min, &self.thresholds, &self.boundary),
        };

        // A label appears at most once even if it maps to several fields.
        let mut warnings: Vec<String> = Vec::new();
        for offset in &offsets {
            if policy::is_warning(offset.offset_days, &self.thresholds, &self.boundary)
                && !warnings.contains(&offset.label)
            {
                warnings.push(offset.label.clone());
            }
        }

        Classification {
            bucket,
            min_offset,
            offsets,
            warnings,
        }
    }

    /// Classify every record and fold the results into aggregate counts.
    ///
    /// Classification is total: every record resolves to a bucket and no
    /// record is ever dropped, so `stats.total` equals `records.len()`.
    /// The only hard failure is an empty monitor map.
    pub fn aggregate(
        &self,
        records: &[Record],
        monitor_map: &MonitorMap,
        today: NaiveDate,
    ) -> WatchResult<AggregateStats> {
        if monitor_map.is_empty() {
            return Err(ClassifyError::EmptyMonitorMap.into());
        }

        debug!(total = records.len(), %today, "classifying table");
        let classifications: Vec<Classification> = records
            .iter()
            .map(|record| self.classify_record(record, monitor_map, today))
            .collect();

        let stats = AggregateStats::fold(monitor_map, &classifications);
        info!(
            total = stats.total,
            red = stats.red,
            yellow = stats.yellow,
            green = stats.green,
            "classification pass complete"
        );
        Ok(stats)
    }

    /// Aggregate over any tabular source.
    pub fn aggregate_source(
        &self,
        source: &dyn IRecordSource,
        monitor_map: &MonitorMap,
        today: NaiveDate,
    ) -> WatchResult<AggregateStats> {
        let records = source.records()?;
        self.aggregate(&records, monitor_map, today)
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
