// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over a sorted slice.
//!
//! The classic inclusive-bounds formulation: keep `low..=high` as the window
//! that could still hold the target, probe the middle, throw away the half
//! that can't. O(log n) comparisons, no allocation.
//!
//! # Probe order
//!
//! With duplicates there are several right answers. We return whichever one
//! the probe sequence hits first, which is fixed by the inclusive bounds and
//! the `low + (high - low) / 2` midpoint. Switching to half-open bounds would
//! still be correct but would change *which* duplicate comes back, so don't.
//!
//! # Unsorted input
//!
//! Sortedness is the caller's job. On unsorted input the answer is
//! meaningless, but the loop still terminates and never indexes out of bounds.
//! If you want it checked, wrap the data in [`SortedSequence`](crate::SortedSequence).

use std::cmp::Ordering;

use crate::contracts::check_search_hit;

/// Returned by [`search`] when the target is absent.
pub const NOT_FOUND: isize = -1;

/// Midpoint of an inclusive window without overflowing.
///
/// `(low + high) / 2` wraps once both bounds pass `usize::MAX / 2`;
/// this form can't because `high - low` never exceeds `high`.
#[inline]
pub fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "midpoint called with low {} > high {}", low, high);
    low + (high - low) / 2
}

/// Find `target` in a sorted slice.
///
/// Returns the index of an element equal to `target`, or `None`.
pub fn search_position<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    if sequence.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = sequence.len() - 1;

    while low <= high {
        let mid = midpoint(low, high);
        match sequence[mid].cmp(target) {
            Ordering::Equal => {
                check_search_hit(sequence, target, mid);
                return Some(mid);
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // high would go to -1: window is empty
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// Find `target` in a sorted integer slice, `-1` if absent.
///
/// ```
/// use kata::search;
///
/// assert_eq!(search(&[1, 3, 5, 7, 9, 11], 7), 3);
/// assert_eq!(search(&[1, 3, 5, 7, 9, 11], 4), -1);
/// ```
pub fn search(sequence: &[i32], target: i32) -> isize {
    // Slices never exceed isize::MAX bytes, so any index fits.
    search_position(sequence, &target).map_or(NOT_FOUND, |index| index as isize)
}
