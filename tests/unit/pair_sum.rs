//! Two-sum scenarios.

use kata::{find_pair_sum, IndexPair, KataError};

#[test]
fn test_two_seven_eleven_fifteen() {
    let pair = find_pair_sum(&[2, 7, 11, 15], 9).unwrap();
    assert_eq!(pair.as_tuple(), (0, 1));
}

#[test]
fn test_three_two_four() {
    let pair = find_pair_sum(&[3, 2, 4], 6).unwrap();
    assert_eq!(<(usize, usize)>::from(pair), (1, 2));
}

#[test]
fn test_no_solution_is_an_error() {
    let err = find_pair_sum(&[1, 2, 3], 100).unwrap_err();
    assert_eq!(err, KataError::NoSolution);
    assert_eq!(err.to_string(), "no two sum solution");
}

#[test]
fn test_unsorted_input_is_fine() {
    let pair = find_pair_sum(&[15, 11, 7, 2], 9).unwrap();
    assert_eq!(pair, IndexPair { first: 2, second: 3 });
}

#[test]
fn test_zero_target_with_zeros() {
    assert_eq!(find_pair_sum(&[0, 4, 3, 0], 0).unwrap().as_tuple(), (0, 3));
}

#[test]
fn test_display_matches_demo_format() {
    assert_eq!(IndexPair { first: 4, second: 12 }.to_string(), "[4, 12]");
}

#[test]
fn test_pairs_order_lexicographically() {
    let earlier = IndexPair { first: 0, second: 9 };
    let later = IndexPair { first: 1, second: 2 };
    assert!(earlier < later);
}
