// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every fallible operation in the crate.
//!
//! Binary search absence is not an error (it is `-1` or `None`), so only two
//! things can go wrong: two-sum exhausting every pair, and a caller asking for
//! a [`SortedSequence`](crate::SortedSequence) over data that isn't sorted.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KataError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KataError {
    /// No pair of distinct positions sums to the target.
    #[error("no two sum solution")]
    NoSolution,
    /// `sequence[position] > sequence[position + 1]`.
    #[error("sequence not sorted at position {position}")]
    Unsorted { position: usize },
}
