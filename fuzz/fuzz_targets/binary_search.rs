// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for binary search.
//!
//! The input is sorted before searching, so every answer can be checked
//! against a linear scan. A second pass searches the raw, usually unsorted
//! input: the answer is meaningless there but the call must still return.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use kata::search;

#[derive(Arbitrary, Debug)]
struct Input {
    values: Vec<i32>,
    target: i32,
}

fuzz_target!(|input: Input| {
    // Unsorted: must not panic, and any hit must be real
    let raw = search(&input.values, input.target);
    if raw != -1 {
        assert_eq!(input.values[raw as usize], input.target);
    }

    let mut sorted = input.values;
    sorted.sort();
    let index = search(&sorted, input.target);

    if sorted.contains(&input.target) {
        assert!(index >= 0, "missed {} in {:?}", input.target, sorted);
        assert_eq!(sorted[index as usize], input.target);
    } else {
        assert_eq!(index, -1, "false hit for {} in {:?}", input.target, sorted);
    }
});
