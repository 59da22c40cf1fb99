// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A slice wrapper that proves it is sorted.
//!
//! [`search`](crate::search) trusts the caller. That is fine in a hot loop
//! and terrible at a trust boundary. [`SortedSequence`] checks once at
//! construction and guarantees sortedness forever after, so its `search`
//! can't be handed garbage.
//!
//! # Example
//!
//! ```
//! use kata::{KataError, SortedSequence};
//!
//! let sorted = SortedSequence::new(vec![1, 3, 5, 7]).unwrap();
//! assert_eq!(sorted.search(5), 2);
//!
//! let err = SortedSequence::new(vec![1, 5, 3]).unwrap_err();
//! assert_eq!(err, KataError::Unsorted { position: 1 });
//! ```

use std::ops::Deref;

use crate::contracts::check_sorted;
use crate::error::{KataError, Result};
use crate::search::{search_position, NOT_FOUND};

/// Owned sequence known to be sorted in non-decreasing order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortedSequence<T> {
    items: Vec<T>,
}

impl<T: Ord> SortedSequence<T> {
    /// Validate and wrap.
    ///
    /// Fails with the first position `i` where `items[i] > items[i + 1]`.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if let Some(position) = first_descent(&items) {
            return Err(KataError::Unsorted { position });
        }
        Ok(Self { items })
    }

    /// Sort the data ourselves. Can't fail.
    pub fn from_unsorted(mut items: Vec<T>) -> Self {
        items.sort();
        check_sorted(&items);
        Self { items }
    }

    /// Binary search, `None` if absent.
    pub fn position(&self, target: &T) -> Option<usize> {
        search_position(&self.items, target)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl SortedSequence<i32> {
    /// Binary search with the `-1` sentinel, same as [`crate::search`].
    pub fn search(&self, target: i32) -> isize {
        self.position(&target)
            .map_or(NOT_FOUND, |index| index as isize)
    }
}

impl<T> Deref for SortedSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord> TryFrom<Vec<T>> for SortedSequence<T> {
    type Error = KataError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

/// First index whose successor is smaller.
fn first_descent<T: Ord>(items: &[T]) -> Option<usize> {
    items.windows(2).position(|w| w[0] > w[1])
}
