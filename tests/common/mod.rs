//! Shared test utilities and oracles.
//!
//! The oracles are the dumbest correct implementations we could write:
//! linear scans with no cleverness. Property tests compare the real
//! implementations against them.

#![allow(dead_code)]

/// The sorted fixture used throughout the search tests.
pub const ODDS: [i32; 6] = [1, 3, 5, 7, 9, 11];

/// Every index holding `target`.
pub fn all_positions(sequence: &[i32], target: i32) -> Vec<usize> {
    sequence
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == target)
        .map(|(i, _)| i)
        .collect()
}

/// Every qualifying pair, in scan order.
pub fn all_pairs(sequence: &[i32], target: i32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            if i64::from(sequence[i]) + i64::from(sequence[j]) == i64::from(target) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Assert that `index` is a legitimate answer for a present target.
pub fn assert_hit(sequence: &[i32], target: i32, index: isize) {
    assert!(index >= 0, "expected a hit for {} in {:?}", target, sequence);
    let index = index as usize;
    assert!(index < sequence.len(), "index {} out of bounds", index);
    assert_eq!(sequence[index], target, "sequence[{}] is not {}", index, target);
}
