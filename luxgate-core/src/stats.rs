//! Scalar sample accumulator
//!
//! Accumulates count/sum/min/max/first/last over a bounded span of integer
//! samples. This is the per-bucket aggregate backing the windowed min/max
//! queries in [`crate::history`].
//!
//! An empty accumulator has no meaningful bounds. Callers must check
//! [`SampleStats::has_value`] before reading `min`/`max`/`first`/`last`;
//! reading them on an empty accumulator is a logic error and trips a
//! `debug_assert`. This is deliberate: a silent zero default could satisfy
//! a threshold query with a phantom bound that no sensor ever reported.

/// Running statistics over a span of integer samples
///
/// Invariant: `min <= first <= max` and `min <= last <= max` whenever
/// `count > 0`. All fields are meaningless while `count == 0`.
///
/// The sample sum is an `i64` and is not guarded against overflow; see
/// the crate error documentation for the domain limits that make this
/// acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStats {
    count: u32,
    sum: i64,
    min: i32,
    max: i32,
    first: i32,
    last: i32,
}

impl SampleStats {
    /// Creates an empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: 0,
            max: 0,
            first: 0,
            last: 0,
        }
    }

    /// Records one sample
    ///
    /// The first recorded sample initializes `first`, `min` and `max`;
    /// later samples only widen the bounds.
    pub fn record(&mut self, value: i32) {
        if self.count == 0 {
            self.first = value;
            self.min = value;
            self.max = value;
        } else {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
        self.count += 1;
        self.sum += i64::from(value);
        self.last = value;
    }

    /// True once at least one sample was recorded
    pub fn has_value(&self) -> bool {
        self.count > 0
    }

    /// Number of recorded samples
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Sum of all recorded samples
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Smallest recorded sample
    ///
    /// Only meaningful when [`Self::has_value`] is true.
    pub fn min(&self) -> i32 {
        debug_assert!(self.has_value(), "min() read on empty accumulator");
        self.min
    }

    /// Largest recorded sample
    ///
    /// Only meaningful when [`Self::has_value`] is true.
    pub fn max(&self) -> i32 {
        debug_assert!(self.has_value(), "max() read on empty accumulator");
        self.max
    }

    /// First recorded sample
    ///
    /// Only meaningful when [`Self::has_value`] is true.
    pub fn first(&self) -> i32 {
        debug_assert!(self.has_value(), "first() read on empty accumulator");
        self.first
    }

    /// Most recently recorded sample
    ///
    /// Only meaningful when [`Self::has_value`] is true.
    pub fn last(&self) -> i32 {
        debug_assert!(self.has_value(), "last() read on empty accumulator");
        self.last
    }

    /// Arithmetic mean of all recorded samples
    ///
    /// Only meaningful when [`Self::has_value`] is true.
    pub fn average(&self) -> f64 {
        debug_assert!(self.has_value(), "average() read on empty accumulator");
        self.sum as f64 / self.count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator() {
        let stats = SampleStats::new();
        assert!(!stats.has_value());
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.sum(), 0);
    }

    #[test]
    fn first_sample_sets_all_bounds() {
        let mut stats = SampleStats::new();
        stats.record(42);

        assert!(stats.has_value());
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.min(), 42);
        assert_eq!(stats.max(), 42);
        assert_eq!(stats.first(), 42);
        assert_eq!(stats.last(), 42);
        assert_eq!(stats.sum(), 42);
    }

    #[test]
    fn bounds_widen() {
        let mut stats = SampleStats::new();
        for v in [5, -3, 12, 0] {
            stats.record(v);
        }

        assert_eq!(stats.count(), 4);
        assert_eq!(stats.min(), -3);
        assert_eq!(stats.max(), 12);
        assert_eq!(stats.first(), 5);
        assert_eq!(stats.last(), 0);
        assert_eq!(stats.sum(), 14);
        assert_eq!(stats.average(), 3.5);
    }

    #[test]
    fn negative_only_samples() {
        let mut stats = SampleStats::new();
        stats.record(-10);
        stats.record(-20);

        assert_eq!(stats.min(), -20);
        assert_eq!(stats.max(), -10);
        assert_eq!(stats.sum(), -30);
    }

    #[test]
    #[should_panic(expected = "min() read on empty accumulator")]
    #[cfg(debug_assertions)]
    fn empty_min_is_a_logic_error() {
        let stats = SampleStats::new();
        let _ = stats.min();
    }
}
