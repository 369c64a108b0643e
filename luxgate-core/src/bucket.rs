//! Time-stamped history bucket
//!
//! A bucket covers one fixed span of the rolling window and owns the
//! statistics accumulated over that span. Buckets are created by the
//! history layer on rotation and carry the previous bucket's last value
//! forward (the continuity rule), so a query spanning a bucket boundary
//! never sees an artificial gap just because the sensor was quiet.

use crate::stats::SampleStats;
use crate::time::Timestamp;

/// One time-span slice of the history
///
/// `start_time` is immutable after construction; samples are only
/// recorded while the bucket is the newest one in its window. Successive
/// buckets in a history must have strictly increasing start times - the
/// history layer documents this as a caller precondition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    start_time: Timestamp,
    stats: SampleStats,
}

impl Bucket {
    /// Creates an empty bucket starting at `start_time`
    pub fn new(start_time: Timestamp) -> Self {
        Self {
            start_time,
            stats: SampleStats::new(),
        }
    }

    /// Creates the successor of `previous`, applying the continuity rule
    ///
    /// If the previous bucket holds at least one sample, its last value is
    /// recorded into the new bucket exactly like a fresh sample (so the
    /// count starts at 1). The last observed state of the monitored
    /// quantity is assumed to persist until a new sample arrives. A
    /// previous bucket with no samples seeds nothing.
    pub fn following(start_time: Timestamp, previous: &Bucket) -> Self {
        let mut bucket = Self::new(start_time);
        if previous.stats.has_value() {
            bucket.stats.record(previous.stats.last());
        }
        bucket
    }

    /// Records one sample into this bucket's span
    pub fn record(&mut self, value: i32) {
        self.stats.record(value);
    }

    /// True once the bucket holds at least one sample (seeded or fresh)
    pub fn has_value(&self) -> bool {
        self.stats.has_value()
    }

    /// Start of this bucket's time span
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Smallest sample in this bucket; only valid when [`Self::has_value`]
    pub fn min(&self) -> i32 {
        self.stats.min()
    }

    /// Largest sample in this bucket; only valid when [`Self::has_value`]
    pub fn max(&self) -> i32 {
        self.stats.max()
    }

    /// Most recent sample in this bucket; only valid when [`Self::has_value`]
    pub fn last(&self) -> i32 {
        self.stats.last()
    }

    /// Full statistics for this bucket's span
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }
}
