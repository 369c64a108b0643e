//! Property tests for the circular window
//!
//! Checks the window against a plain `VecDeque` model under arbitrary
//! push sequences: index bookkeeping, eviction order, and iteration
//! order must all agree with the model for every capacity.

use std::collections::VecDeque;

use proptest::prelude::*;

use luxgate_core::CircularWindow;

proptest! {
    #[test]
    fn indices_track_length(capacity in 1usize..16, values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut window = CircularWindow::new(capacity).unwrap();

        for &value in &values {
            window.push(value);

            prop_assert!(window.len() <= capacity);
            prop_assert_eq!(
                window.max_index() - window.min_index(),
                window.len() as i64
            );
            prop_assert_eq!(window.is_full(), window.len() == capacity);
        }

        prop_assert_eq!(window.len(), values.len().min(capacity));
        prop_assert_eq!(window.max_index(), values.len() as i64);
    }

    #[test]
    fn eviction_matches_model(capacity in 1usize..16, values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut window = CircularWindow::new(capacity).unwrap();
        let mut model: VecDeque<i32> = VecDeque::new();

        for &value in &values {
            // The element about to be evicted is whatever first() shows.
            let expected_evicted = if window.is_full() {
                window.first().copied()
            } else {
                None
            };

            let evicted = window.push(value);
            prop_assert_eq!(evicted, expected_evicted);

            model.push_back(value);
            if model.len() > capacity {
                let model_evicted = model.pop_front();
                prop_assert_eq!(evicted, model_evicted);
            } else {
                prop_assert_eq!(evicted, None);
            }
        }
    }

    #[test]
    fn iteration_agrees_with_model(capacity in 1usize..16, values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut window = CircularWindow::new(capacity).unwrap();
        let mut model: VecDeque<i32> = VecDeque::new();

        for &value in &values {
            window.push(value);
            model.push_back(value);
            if model.len() > capacity {
                model.pop_front();
            }
        }

        let forward: Vec<i32> = window.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let backward: Vec<i32> = window.iter_rev().copied().collect();
        let mut expected_rev = expected.clone();
        expected_rev.reverse();
        prop_assert_eq!(&backward, &expected_rev);

        prop_assert_eq!(window.first(), model.front());
        prop_assert_eq!(window.last(), model.back());
    }

    #[test]
    fn get_never_panics(capacity in 1usize..8, pushes in 0usize..32, probe in -4i64..40) {
        let mut window = CircularWindow::new(capacity).unwrap();
        for i in 0..pushes {
            window.push(i as i32);
        }

        let in_range = probe >= window.min_index() && probe < window.max_index();
        prop_assert_eq!(window.get(probe).is_some(), in_range);

        if in_range {
            // Logical indices identify elements for life: index i always
            // holds the i-th pushed value until it is evicted.
            prop_assert_eq!(window.get(probe), Some(&(probe as i32)));
        }
    }
}
