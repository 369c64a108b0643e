//! Fixed-Capacity Circular Window with Logical Indices
//!
//! ## Overview
//!
//! This module provides the circular (ring) buffer that backs the bucketed
//! sensor history. Unlike collections that grow on demand, the window has a
//! fixed capacity chosen at construction: it appends until full, then every
//! further push overwrites the oldest element and hands it back to the
//! caller.
//!
//! ## Design Rationale
//!
//! ### Why Logical Indices?
//!
//! Elements are addressed by monotonically increasing *logical* indices
//! rather than physical slots. The window tracks two `i64` bounds:
//!
//! - `min_index`: logical index of the oldest live element
//! - `max_index`: one past the logical index of the newest live element
//!
//! Both only ever grow, so an index handed out once stays meaningful for
//! the lifetime of the window: `get` on an evicted index simply returns
//! `None` instead of silently aliasing a newer element. The history layer
//! relies on this — its completeness check must never panic on an index
//! that rotated out from under it.
//!
//! ### Memory Layout
//!
//! Storage is a `Vec<Option<T>>` allocated once at construction and never
//! resized. A logical index `i` lives in physical slot `i % capacity`, so
//! eviction never shifts the store:
//!
//! ```text
//! CircularWindow<T> with capacity 4, after 6 pushes:
//!
//! Physical slots:   [ e4 | e5 | e2 | e3 ]
//!                      0    1    2    3
//!
//! Logical view:     min_index = 2, max_index = 6
//!                   live indices 2, 3, 4, 5 → slots 2, 3, 0, 1
//! ```
//!
//! ### Invariants
//!
//! - `0 <= max_index - min_index <= capacity`
//! - `len() == max_index - min_index`
//! - pushing into a full window evicts exactly the element `first()`
//!   returned immediately before the push
//!
//! ## Thread Safety
//!
//! Not thread-safe. The owning history serializes access; iterators borrow
//! the window, so the borrow checker rules out mutation while one is alive.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::errors::{HistoryError, HistoryResult};

/// Fixed-capacity circular window addressed by logical indices
///
/// Grows by appending until `capacity` elements are live, then each
/// further [`CircularWindow::push`] evicts the oldest element. Generic
/// over the element type; the history layer instantiates it with
/// [`crate::bucket::Bucket`], tests exercise it with plain integers.
#[derive(Debug, Clone)]
pub struct CircularWindow<T> {
    /// Physical store, exactly `capacity` slots, allocated once
    slots: Vec<Option<T>>,

    /// Logical index of the oldest live element
    min_index: i64,

    /// One past the logical index of the newest live element
    max_index: i64,
}

impl<T> CircularWindow<T> {
    /// Creates an empty window with room for `capacity` elements
    ///
    /// Fails with [`HistoryError::InvalidCapacity`] when `capacity` is 0:
    /// a zero-slot window could never hold the current element, so the
    /// request is rejected here rather than at push time.
    pub fn new(capacity: usize) -> HistoryResult<Self> {
        if capacity == 0 {
            return Err(HistoryError::InvalidCapacity {
                requested: capacity,
            });
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots,
            min_index: 0,
            max_index: 0,
        })
    }

    /// Maximum number of live elements
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        (self.max_index - self.min_index) as usize
    }

    /// True while no element was ever pushed
    pub fn is_empty(&self) -> bool {
        self.min_index == self.max_index
    }

    /// True once every further push evicts
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Logical index of the oldest live element
    pub fn min_index(&self) -> i64 {
        self.min_index
    }

    /// One past the logical index of the newest live element
    pub fn max_index(&self) -> i64 {
        self.max_index
    }

    /// Maps a logical index to its physical slot
    ///
    /// Logical indices start at 0 and only grow, so plain remainder is
    /// enough; no negative handling needed.
    fn slot(&self, logical: i64) -> usize {
        (logical % self.slots.len() as i64) as usize
    }

    /// Appends an element, evicting and returning the oldest when full
    ///
    /// While the window still has free slots the element is appended and
    /// `None` is returned. Once full, the new element overwrites the
    /// oldest logical slot and the evicted element is handed back so the
    /// caller can dispose of it.
    pub fn push(&mut self, value: T) -> Option<T> {
        // When full, the oldest element sits in exactly the slot the new
        // one maps to: max_index - min_index == capacity.
        let slot = self.slot(self.max_index);
        let evicted = if self.is_full() {
            self.min_index += 1;
            self.slots[slot].replace(value)
        } else {
            self.slots[slot] = Some(value);
            None
        };
        self.max_index += 1;
        evicted
    }

    /// Returns the element at a logical index, `None` when out of range
    ///
    /// Never panics: indices below `min_index` (evicted or never used)
    /// and at or above `max_index` (not yet pushed) yield `None`.
    pub fn get(&self, logical: i64) -> Option<&T> {
        if logical < self.min_index || logical >= self.max_index {
            return None;
        }
        self.slots[self.slot(logical)].as_ref()
    }

    /// Oldest live element
    pub fn first(&self) -> Option<&T> {
        self.get(self.min_index)
    }

    /// Newest live element
    pub fn last(&self) -> Option<&T> {
        self.get(self.max_index - 1)
    }

    /// Mutable access to the newest live element
    pub fn last_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.slot(self.max_index - 1);
        self.slots[slot].as_mut()
    }

    /// Iterates from oldest to newest
    ///
    /// The iterator snapshots the index bounds at creation; it borrows the
    /// window, so the window cannot be mutated while it is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            window: self,
            next: self.min_index,
            end: self.max_index,
        }
    }

    /// Iterates from newest to oldest
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            window: self,
            next: self.max_index - 1,
            start: self.min_index,
        }
    }
}

/// Forward iterator over a window, oldest to newest
pub struct Iter<'a, T> {
    window: &'a CircularWindow<T>,
    next: i64,
    end: i64,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let item = self.window.get(self.next);
        self.next += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next).max(0) as usize;
        (remaining, Some(remaining))
    }
}

/// Backward iterator over a window, newest to oldest
pub struct IterRev<'a, T> {
    window: &'a CircularWindow<T>,
    next: i64,
    start: i64,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.start {
            return None;
        }
        let item = self.window.get(self.next);
        self.next -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.next - self.start + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_rejected() {
        let window: HistoryResult<CircularWindow<i32>> = CircularWindow::new(0);
        assert_eq!(
            window.err(),
            Some(HistoryError::InvalidCapacity { requested: 0 })
        );
    }

    #[test]
    fn empty_window() {
        let window: CircularWindow<i32> = CircularWindow::new(4).unwrap();
        assert!(window.is_empty());
        assert!(!window.is_full());
        assert_eq!(window.len(), 0);
        assert!(window.first().is_none());
        assert!(window.last().is_none());
        assert!(window.get(0).is_none());
    }

    #[test]
    fn fills_then_evicts_in_order() {
        let mut window = CircularWindow::new(3).unwrap();

        assert_eq!(window.push(10), None);
        assert_eq!(window.push(11), None);
        assert_eq!(window.push(12), None);
        assert!(window.is_full());

        // Each further push evicts the element first() pointed at
        assert_eq!(window.first(), Some(&10));
        assert_eq!(window.push(13), Some(10));
        assert_eq!(window.first(), Some(&11));
        assert_eq!(window.push(14), Some(11));

        assert_eq!(window.len(), 3);
        assert_eq!(window.min_index(), 2);
        assert_eq!(window.max_index(), 5);
    }

    #[test]
    fn get_by_logical_index() {
        let mut window = CircularWindow::new(2).unwrap();
        window.push('a');
        window.push('b');
        window.push('c'); // evicts 'a' at logical 0

        assert_eq!(window.get(0), None);
        assert_eq!(window.get(1), Some(&'b'));
        assert_eq!(window.get(2), Some(&'c'));
        assert_eq!(window.get(3), None);
        assert_eq!(window.get(-1), None);
    }

    #[test]
    fn last_mut_updates_tail() {
        let mut window = CircularWindow::new(2).unwrap();
        window.push(1);
        window.push(2);

        *window.last_mut().unwrap() = 20;
        assert_eq!(window.last(), Some(&20));
        assert_eq!(window.first(), Some(&1));
    }

    #[test]
    fn forward_iteration_is_chronological() {
        let mut window = CircularWindow::new(3).unwrap();
        for v in 0..5 {
            window.push(v);
        }

        let forward: Vec<i32> = window.iter().copied().collect();
        assert_eq!(forward, vec![2, 3, 4]);
    }

    #[test]
    fn backward_iteration_is_reverse_chronological() {
        let mut window = CircularWindow::new(3).unwrap();
        for v in 0..5 {
            window.push(v);
        }

        let backward: Vec<i32> = window.iter_rev().copied().collect();
        assert_eq!(backward, vec![4, 3, 2]);
    }

    #[test]
    fn iterators_are_restartable() {
        let mut window = CircularWindow::new(2).unwrap();
        window.push(7);
        window.push(8);

        assert_eq!(window.iter().count(), 2);
        assert_eq!(window.iter().count(), 2);
        assert_eq!(window.iter_rev().count(), 2);
    }

    #[test]
    fn capacity_one_window() {
        let mut window = CircularWindow::new(1).unwrap();
        assert_eq!(window.push(5), None);
        assert!(window.is_full());
        assert_eq!(window.push(6), Some(5));
        assert_eq!(window.first(), window.last());
        assert_eq!(window.last(), Some(&6));
    }
}
