//! Per-item history registry
//!
//! Hosts usually monitor more than one quantity: each automation item
//! (an illuminance sensor per facade, say) gets its own independent
//! [`History`]. The registry owns those histories keyed by item name,
//! rotates them all on one scheduler tick, and routes samples and queries
//! by name. Items are registered lazily by the sampler; an unknown name
//! is reported back instead of being silently created mid-stream, since a
//! history created at query time could never prove anything anyway.

#[cfg(not(feature = "std"))]
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::errors::{HistoryError, HistoryResult};
use crate::history::History;
use crate::time::{Clock, Timestamp};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

/// Collection of independent histories keyed by item name
///
/// All histories share one bucket count, validated once at construction
/// so later registrations cannot fail. Like [`History`], the registry has
/// no interior locking: hosts that sample, rotate and query from
/// different threads put the whole registry behind one mutex.
#[derive(Debug, Clone)]
pub struct HistoryRegistry {
    bucket_count: usize,
    histories: BTreeMap<String, History>,
}

impl HistoryRegistry {
    /// Creates an empty registry whose histories hold `bucket_count` buckets
    pub fn new(bucket_count: usize) -> HistoryResult<Self> {
        if bucket_count == 0 {
            return Err(HistoryError::InvalidCapacity {
                requested: bucket_count,
            });
        }
        Ok(Self {
            bucket_count,
            histories: BTreeMap::new(),
        })
    }

    /// Registers `name` if unknown; idempotent
    ///
    /// A fresh history starts its first bucket at `now`. Re-registering an
    /// existing item keeps its accumulated history untouched.
    pub fn ensure_registered(&mut self, name: &str, now: Timestamp) {
        if self.histories.contains_key(name) {
            return;
        }
        // bucket_count was validated in new(), so this cannot fail.
        if let Ok(history) = History::new(now, self.bucket_count) {
            log_debug!("registered history for '{}' starting at {}", name, now);
            self.histories.insert(name.to_string(), history);
        }
    }

    /// Records a sample for `name`; false when the item is unknown
    pub fn record(&mut self, name: &str, value: i32) -> bool {
        match self.histories.get_mut(name) {
            Some(history) => {
                history.record(value);
                true
            }
            None => {
                log_warn!("dropping sample {} for unregistered item '{}'", value, name);
                false
            }
        }
    }

    /// Rolls every registered history forward by one bucket starting at `now`
    pub fn rotate_all(&mut self, now: Timestamp) {
        log_debug!("rotating {} histories at {}", self.histories.len(), now);
        for history in self.histories.values_mut() {
            history.advance(now);
        }
    }

    /// [`Self::rotate_all`] with the timestamp read from an explicit clock
    pub fn rotate_all_with(&mut self, clock: &impl Clock) {
        self.rotate_all(clock.now());
    }

    /// Proven lower bound for `name` over `[timestamp, now]`
    ///
    /// `None` when the item is unknown or the bound cannot be proven.
    pub fn min_since(&self, name: &str, timestamp: Timestamp) -> Option<i32> {
        self.bound_since(name, timestamp, History::min_since)
    }

    /// Proven upper bound for `name` over `[timestamp, now]`
    ///
    /// `None` when the item is unknown or the bound cannot be proven.
    pub fn max_since(&self, name: &str, timestamp: Timestamp) -> Option<i32> {
        self.bound_since(name, timestamp, History::max_since)
    }

    fn bound_since(
        &self,
        name: &str,
        timestamp: Timestamp,
        query: fn(&History, Timestamp) -> Option<i32>,
    ) -> Option<i32> {
        let history = match self.histories.get(name) {
            Some(history) => history,
            None => {
                log_warn!("no history registered for item '{}'", name);
                return None;
            }
        };
        let result = query(history, timestamp);
        if result.is_none() {
            log_warn!(
                "unable to prove a bound for '{}' since {}: not enough history",
                name,
                timestamp
            );
        }
        result
    }

    /// The history registered under `name`, if any
    pub fn history(&self, name: &str) -> Option<&History> {
        self.histories.get(name)
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.histories.len()
    }

    /// True while no item is registered
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    /// Drops all registered histories
    ///
    /// Hosts call this on deactivation; the bucket count is kept, so the
    /// registry can be reused.
    pub fn clear(&mut self) {
        self.histories.clear();
    }
}
