//! Runtime contracts for the search routines.
//!
//! Debug-mode assertions that check each operation's postcondition right
//! before it returns. They compile to nothing in release builds.
//!
//! | Contract Function   | Property                                          |
//! |---------------------|---------------------------------------------------|
//! | `check_search_hit`  | returned index is in bounds and holds the target  |
//! | `check_pair_valid`  | `first < second`, both in bounds, values sum up   |
//! | `check_sorted`      | validated wrappers really hold sorted data        |
//!
//! None of these check the *input* precondition of `search`. Unsorted input
//! is the caller's problem and must not turn into a panic here.

// ============================================================================
// BINARY SEARCH CONTRACTS
// ============================================================================

/// Check that a reported hit actually points at the target.
///
/// # Panics (debug builds only)
/// Panics if `index` is out of bounds or `sequence[index] != *target`.
#[inline]
pub fn check_search_hit<T: Ord>(sequence: &[T], target: &T, index: usize) {
    debug_assert!(
        index < sequence.len(),
        "Contract violation: search hit {} >= sequence.len() {}",
        index,
        sequence.len()
    );

    if index < sequence.len() {
        debug_assert!(
            sequence[index] == *target,
            "Contract violation: sequence[{}] does not equal the target",
            index
        );
    }
}

/// Check that a slice is sorted in non-decreasing order.
#[inline]
pub fn check_sorted<T: Ord>(sequence: &[T]) {
    debug_assert!(
        sequence.windows(2).all(|w| w[0] <= w[1]),
        "Contract violation: sequence is not sorted"
    );
}

// ============================================================================
// PAIR SUM CONTRACTS
// ============================================================================

/// Check that a two-sum answer is well-formed.
///
/// # Panics (debug builds only)
/// Panics if the indices are out of order, out of bounds, or don't sum
/// to `target`.
#[inline]
pub fn check_pair_valid(sequence: &[i32], target: i32, first: usize, second: usize) {
    debug_assert!(
        first < second,
        "Contract violation: pair ({}, {}) is not strictly increasing",
        first,
        second
    );
    debug_assert!(
        second < sequence.len(),
        "Contract violation: pair index {} >= sequence.len() {}",
        second,
        sequence.len()
    );

    if first < second && second < sequence.len() {
        debug_assert!(
            i64::from(sequence[first]) + i64::from(sequence[second]) == i64::from(target),
            "Contract violation: {} + {} != {}",
            sequence[first],
            sequence[second],
            target
        );
    }
}
