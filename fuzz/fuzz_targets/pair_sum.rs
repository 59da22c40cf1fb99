// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for two-sum.
//!
//! Extreme values are where `a + b` wraps in 32-bit arithmetic. Any pair we
//! return has to sum exactly, checked in i64.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use kata::{find_pair_sum, KataError};

#[derive(Arbitrary, Debug)]
struct Input {
    values: Vec<i32>,
    target: i32,
}

fuzz_target!(|input: Input| {
    // Quadratic scan: keep inputs small enough to not time out
    let values = &input.values[..input.values.len().min(512)];

    match find_pair_sum(values, input.target) {
        Ok(pair) => {
            assert!(pair.first < pair.second);
            let sum = i64::from(values[pair.first]) + i64::from(values[pair.second]);
            assert_eq!(sum, i64::from(input.target));
        }
        Err(e) => assert_eq!(e, KataError::NoSolution),
    }
});
