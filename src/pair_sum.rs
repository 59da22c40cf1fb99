//! Two-sum by exhaustive pair scan.
//!
//! Every pair `(i, j)` with `i < j` is tried, outer index ascending, inner
//! index ascending. The first pair that sums to the target wins, so when
//! several pairs qualify the answer is the lexicographically smallest one.
//! O(n²) comparisons, O(1) extra space.
//!
//! Sums are computed in `i64`. Two `i32`s can't overflow there, which keeps
//! `i32::MAX + 2` from wrapping around into a false match.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contracts::check_pair_valid;
use crate::error::{KataError, Result};

/// Two distinct positions in a sequence, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    /// Both indices as a tuple.
    pub fn as_tuple(self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        pair.as_tuple()
    }
}

/// Formats as `[first, second]`.
impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

/// Find the first pair of positions whose values sum to `target`.
///
/// ```
/// use kata::{find_pair_sum, KataError};
///
/// let pair = find_pair_sum(&[2, 7, 11, 15], 9).unwrap();
/// assert_eq!(pair.as_tuple(), (0, 1));
/// assert_eq!(find_pair_sum(&[1, 2, 3], 100), Err(KataError::NoSolution));
/// ```
pub fn find_pair_sum(sequence: &[i32], target: i32) -> Result<IndexPair> {
    let wanted = i64::from(target);

    for i in 0..sequence.len() {
        let needed = wanted - i64::from(sequence[i]);
        for j in (i + 1)..sequence.len() {
            if i64::from(sequence[j]) == needed {
                check_pair_valid(sequence, target, i, j);
                return Ok(IndexPair {
                    first: i,
                    second: j,
                });
            }
        }
    }

    Err(KataError::NoSolution)
}
