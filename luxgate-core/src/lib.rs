//! Windowed sensor history for Luxgate
//!
//! Tracks a noisy stream of periodic integer sensor samples and answers
//! whether a rolling time window can be *proven* to have stayed below or
//! above a threshold. Designed to gate automation actions (e.g. "only
//! retract the blinds if illuminance stayed low for the whole window"),
//! so the query fails closed: any gap in the sampled span yields `None`,
//! never a guessed bound.
//!
//! Key constraints:
//! - No internal threads, no I/O, no ambient clock reads
//! - O(1) ingestion and rotation, O(bucket count) queries
//! - Heap usage fixed at construction (one allocation per history)
//!
//! ```
//! use luxgate_core::History;
//!
//! let mut history = History::new(0, 3).unwrap();
//! history.record(10);
//! history.advance(60_000); // next bucket, seeded with the last sample
//! history.record(20);
//!
//! // Provable bounds over [0, now]
//! assert_eq!(history.max_since(0), Some(20));
//! assert_eq!(history.min_since(0), Some(10));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bucket;
pub mod errors;
pub mod history;
pub mod registry;
pub mod stats;
pub mod time;
pub mod window;

// Public API
pub use bucket::Bucket;
pub use errors::{HistoryError, HistoryResult};
pub use history::History;
pub use registry::HistoryRegistry;
pub use stats::SampleStats;
pub use time::{Clock, Timestamp};
pub use window::CircularWindow;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
