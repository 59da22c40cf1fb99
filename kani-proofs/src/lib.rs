// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for kata's search primitives.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Midpoint**: never overflows and stays inside `low..=high`
//! 2. **Search bounds**: binary search never panics or indexes out of
//!    bounds, sorted or not
//! 3. **Search soundness**: a reported hit holds the target
//! 4. **Two-sum soundness**: a reported pair is ordered and sums exactly

/// Longest slice the bounded proofs explore.
pub const MAX_PROOF_LEN: usize = 8;

// ============================================================================
// SEARCH PRIMITIVES (copied from src/search.rs and src/pair_sum.rs)
// ============================================================================

use std::cmp::Ordering;

/// Midpoint of an inclusive window without overflowing.
pub fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "midpoint called with low {} > high {}", low, high);
    low + (high - low) / 2
}

/// Stand-in for the crate's debug contract; under Kani it is a proof obligation.
fn check_search_hit<T: Ord>(sequence: &[T], target: &T, index: usize) {
    #[cfg(kani)]
    kani::assert(
        index < sequence.len() && sequence[index] == *target,
        "hit must be in bounds and hold the target",
    );
    #[cfg(not(kani))]
    debug_assert!(index < sequence.len() && sequence[index] == *target);
}

/// Binary search over inclusive bounds. Body must match src/search.rs.
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
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// First pair in scan order whose values sum to `target`.
pub fn find_pair_sum(sequence: &[i32], target: i32) -> Option<(usize, usize)> {
    let wanted = i64::from(target);
    for i in 0..sequence.len() {
        let needed = wanted - i64::from(sequence[i]);
        for j in (i + 1)..sequence.len() {
            if i64::from(sequence[j]) == needed {
                return Some((i, j));
            }
        }
    }
    None
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Build a symbolic slice of up to MAX_PROOF_LEN values.
    fn any_values(buf: &mut [i32; MAX_PROOF_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_PROOF_LEN);
        for i in 0..MAX_PROOF_LEN {
            buf[i] = kani::any();
        }
        len
    }

    /// Verify midpoint never overflows for any valid window.
    #[kani::proof]
    fn verify_midpoint_in_window() {
        let low: usize = kani::any();
        let high: usize = kani::any_where(|&h| h >= low);

        let mid = midpoint(low, high);

        kani::assert(mid >= low, "midpoint must not fall below low");
        kani::assert(mid <= high, "midpoint must not exceed high");
    }

    /// Verify search never panics, on sorted or unsorted input.
    #[kani::proof]
    #[kani::unwind(10)] // log2(MAX_PROOF_LEN) iterations, generously
    fn verify_search_no_panic() {
        let mut buf = [0i32; MAX_PROOF_LEN];
        let len = any_values(&mut buf);
        let target: i32 = kani::any();

        if let Some(index) = search_position(&buf[..len], &target) {
            kani::assert(index < len, "hit must be in bounds");
            kani::assert(buf[index] == target, "hit must hold the target");
        }
    }

    /// Verify sorted input with the target present is always found.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_search_complete_on_sorted() {
        let mut buf = [0i32; MAX_PROOF_LEN];
        let len = any_values(&mut buf);
        let slice = &buf[..len];
        kani::assume(slice.windows(2).all(|w| w[0] <= w[1]));

        let pick: usize = kani::any_where(|&i| i < len);
        let target = slice[pick];

        kani::assert(
            search_position(slice, &target).is_some(),
            "present value must be found in sorted input",
        );
    }

    /// Verify any reported pair is ordered and sums exactly.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_pair_sum_sound() {
        let mut buf = [0i32; MAX_PROOF_LEN];
        let len = any_values(&mut buf);
        let target: i32 = kani::any();

        if let Some((i, j)) = find_pair_sum(&buf[..len], target) {
            kani::assert(i < j, "pair must be strictly ordered");
            kani::assert(j < len, "pair must be in bounds");
            kani::assert(
                i64::from(buf[i]) + i64::from(buf[j]) == i64::from(target),
                "pair must sum exactly",
            );
        }
    }
}
