// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two textbook searches, done carefully.
//!
//! - [`search`]: binary search over a sorted `i32` slice, `-1` when absent.
//! - [`find_pair_sum`]: brute-force two-sum, first pair in scan order, or
//!   [`KataError::NoSolution`].
//!
//! The two share nothing but the error type. Both are pure: no allocation,
//! no I/O, no shared state, safe to call from any thread.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │  search.rs  │◀────│ verified.rs  │
//! │  (search,   │     │ (SortedSeq-  │
//! │   midpoint) │     │  uence)      │
//! └─────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌──────────────────────────────────┐     ┌─────────────┐
//! │          contracts.rs            │◀────│ pair_sum.rs │
//! │  (debug-only postconditions)     │     │ (IndexPair) │
//! └──────────────────────────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use kata::{find_pair_sum, search};
//!
//! assert_eq!(search(&[1, 3, 5, 7, 9, 11], 7), 3);
//! assert_eq!(find_pair_sum(&[2, 7, 11, 15], 9).unwrap().to_string(), "[0, 1]");
//! ```

// Module declarations
pub mod contracts;
mod error;
mod pair_sum;
mod search;
mod verified;

// Re-exports for public API
pub use error::{KataError, Result};
pub use pair_sum::{find_pair_sum, IndexPair};
pub use search::{midpoint, search, search_position, NOT_FOUND};
pub use verified::SortedSequence;
