//! Error types for history construction
//!
//! The error surface is deliberately tiny. Only construction can fail:
//! a window needs at least one bucket to hold the current time span.
//! Everything else that can "go wrong" at runtime — a window that cannot
//! prove a bound because part of the span has no samples — is a routine,
//! expected outcome and is reported as the `None` branch of the query
//! result, never through this error channel.
//!
//! Errors are `Copy` and heap-free so they remain cheap to return and
//! store on embedded targets.
//!
//! Known, unguarded limitation: the per-bucket sample sum is an `i64`
//! and is not checked for overflow. Callers bound the magnitude of the
//! monitored value and the sample count per bucket via domain limits
//! (e.g. lux readings polled once a second over a minute-long bucket).

use thiserror_no_std::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors raised when building a history - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// Requested window capacity cannot hold a single bucket
    #[error("invalid capacity {requested}: a window needs at least 1 bucket")]
    InvalidCapacity {
        /// The capacity the caller asked for
        requested: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for HistoryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidCapacity { requested } => {
                defmt::write!(fmt, "invalid capacity {}", requested)
            }
        }
    }
}
