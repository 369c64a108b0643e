//! Bucketed Sensor History with Provable Windowed Bounds
//!
//! ## Overview
//!
//! A [`History`] owns a fixed number of time buckets arranged in a
//! [`CircularWindow`] and answers one kind of question: over the interval
//! `[timestamp, now]`, what bound on the sampled value can be *proven*?
//! It is the decision core behind automations like "only retract the
//! blinds if illuminance stayed below X for the last 10 minutes".
//!
//! ## Proof, Not Estimate
//!
//! The queries return a bound only when every bucket touching the
//! requested interval holds at least one sample. A bucket without data
//! could hide an excursion past the threshold, so the conservative answer
//! for an incomplete span is `None` - "unknown", never a guess. Two rules
//! keep that strictness workable in practice:
//!
//! - **Continuity**: on rotation the new bucket is seeded with the
//!   previous bucket's last value (see [`Bucket::following`]), so a quiet
//!   sensor does not punch false "incomplete" holes into the window.
//! - **Reach check**: if the oldest retained bucket starts after the
//!   requested timestamp, the history simply does not reach far enough
//!   back, and the query is `None` regardless of bucket contents.
//!
//! ## Call Pattern
//!
//! An external sampler calls [`History::record`] whenever a reading
//! arrives; an external scheduler calls [`History::advance`] once per
//! bucket span to roll the window forward; a decision component calls
//! [`History::min_since`] / [`History::max_since`]. All entry points are
//! synchronous and bounded: record and advance are O(1), queries are
//! O(bucket count).
//!
//! ## Thread Safety
//!
//! No interior locking. Mutators take `&mut self`, so single-threaded
//! ownership is enforced by the borrow checker; hosts that sample and
//! query from different threads wrap the whole instance in one mutex.
//! Call frequency is one per sensor poll, so a coarse lock costs nothing.

use crate::bucket::Bucket;
use crate::errors::HistoryResult;
use crate::time::Timestamp;
use crate::window::CircularWindow;

/// Which bound a query folds over the walked buckets
#[derive(Clone, Copy)]
enum Extremum {
    Min,
    Max,
}

/// Rolling, bucketed history of one integer-valued sensor quantity
///
/// Construction pushes the first bucket, so the window is never logically
/// empty: there is always a current bucket to record into.
#[derive(Debug, Clone)]
pub struct History {
    window: CircularWindow<Bucket>,
}

impl History {
    /// Creates a history of `bucket_count` buckets, the first one starting
    /// at `initial_start_time`
    ///
    /// Fails with [`crate::HistoryError::InvalidCapacity`] when
    /// `bucket_count` is 0. A capacity of 1 is legal: every
    /// [`Self::advance`] then replaces the sole bucket.
    pub fn new(initial_start_time: Timestamp, bucket_count: usize) -> HistoryResult<Self> {
        let mut window = CircularWindow::new(bucket_count)?;
        window.push(Bucket::new(initial_start_time));
        Ok(Self { window })
    }

    /// Records a sample into the current (newest) bucket
    ///
    /// May be called any number of times between rotations. The sample is
    /// timestamped implicitly: "now" belongs to the current bucket.
    pub fn record(&mut self, value: i32) {
        // The window is never empty: the constructor pushes the first
        // bucket and nothing ever removes the last one.
        if let Some(tail) = self.window.last_mut() {
            tail.record(value);
        }
    }

    /// Rolls the window forward by one bucket starting at `new_start_time`
    ///
    /// The new bucket is seeded from the current tail per the continuity
    /// rule; once the window is full, the oldest bucket is evicted and
    /// dropped. `new_start_time` must be strictly greater than the current
    /// tail's start time - this is a documented caller precondition, not a
    /// runtime check, and query results are meaningless if it is violated.
    pub fn advance(&mut self, new_start_time: Timestamp) {
        let next = match self.window.last() {
            Some(tail) => Bucket::following(new_start_time, tail),
            None => Bucket::new(new_start_time),
        };
        self.window.push(next);
    }

    /// Proven lower bound of the sampled value over `[timestamp, now]`
    ///
    /// `None` when the history does not reach back to `timestamp`, or when
    /// any bucket in the queried span holds no sample.
    pub fn min_since(&self, timestamp: Timestamp) -> Option<i32> {
        self.bound_since(timestamp, Extremum::Min)
    }

    /// Proven upper bound of the sampled value over `[timestamp, now]`
    ///
    /// `None` when the history does not reach back to `timestamp`, or when
    /// any bucket in the queried span holds no sample.
    pub fn max_since(&self, timestamp: Timestamp) -> Option<i32> {
        self.bound_since(timestamp, Extremum::Max)
    }

    /// Backward walk shared by both queries
    ///
    /// Walks newest to oldest, folding the per-bucket bound. Aborts with
    /// `None` on the first bucket without data (the bound cannot be
    /// proven) and stops after the first bucket that covers `timestamp`.
    fn bound_since(&self, timestamp: Timestamp, extremum: Extremum) -> Option<i32> {
        let oldest = self.window.first()?;
        if oldest.start_time() > timestamp {
            // History does not reach far enough back to claim anything
            // about an interval starting at `timestamp`.
            return None;
        }

        let mut bound: Option<i32> = None;
        for bucket in self.window.iter_rev() {
            if !bucket.has_value() {
                return None;
            }

            let candidate = match extremum {
                Extremum::Min => bucket.min(),
                Extremum::Max => bucket.max(),
            };
            bound = Some(match (bound, extremum) {
                (Some(b), Extremum::Min) => b.min(candidate),
                (Some(b), Extremum::Max) => b.max(candidate),
                (None, _) => candidate,
            });

            if bucket.start_time() <= timestamp {
                // This bucket covers `timestamp`; the interval is fully
                // walked.
                break;
            }
        }
        bound
    }

    /// Number of buckets the window can hold
    pub fn bucket_count(&self) -> usize {
        self.window.capacity()
    }

    /// Number of buckets currently retained
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Always false: construction pushes the first bucket
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Start time of the newest bucket ("now" from the window's view)
    pub fn newest_start(&self) -> Option<Timestamp> {
        self.window.last().map(Bucket::start_time)
    }

    /// Start time of the oldest retained bucket
    pub fn oldest_start(&self) -> Option<Timestamp> {
        self.window.first().map(Bucket::start_time)
    }
}
