//! Time handling for history tracking
//!
//! The core never reads ambient time: every entry point that cares about
//! time takes a caller-supplied [`Timestamp`]. The [`Clock`] trait exists
//! for hosts that drive rotation from a scheduler and want to pass their
//! time source around explicitly instead of sprinkling clock reads.

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time supplied by the host
pub trait Clock {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Wall clock time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Settable time source for tests and simulations
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    timestamp: Timestamp,
}

impl ManualClock {
    /// Create a clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);

        clock.set(60_000);
        assert_eq!(clock.now(), 60_000);
    }
}
