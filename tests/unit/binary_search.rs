//! Binary search scenarios.

use super::common::{assert_hit, ODDS};
use kata::{search, search_position, NOT_FOUND};

#[test]
fn test_finds_seven_at_three() {
    assert_eq!(search(&ODDS, 7), 3);
}

#[test]
fn test_missing_four_is_sentinel() {
    assert_eq!(search(&ODDS, 4), -1);
    assert_eq!(NOT_FOUND, -1);
}

#[test]
fn test_empty_sequence_is_sentinel() {
    for target in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(search(&[], target), -1);
    }
}

#[test]
fn test_first_and_last_elements() {
    assert_eq!(search(&ODDS, 1), 0);
    assert_eq!(search(&ODDS, 11), 5);
}

#[test]
fn test_gaps_between_elements_are_absent() {
    for target in [0, 2, 4, 6, 8, 10, 12] {
        assert_eq!(search(&ODDS, target), -1, "target {}", target);
    }
}

#[test]
fn test_negative_values() {
    let sequence = [-40, -7, -3, 0, 12, 99];
    assert_eq!(search(&sequence, -7), 1);
    assert_eq!(search(&sequence, 0), 3);
    assert_eq!(search(&sequence, -8), -1);
}

#[test]
fn test_extreme_values() {
    let sequence = [i32::MIN, -1, 0, i32::MAX];
    assert_eq!(search(&sequence, i32::MIN), 0);
    assert_eq!(search(&sequence, i32::MAX), 3);
}

#[test]
fn test_duplicates_return_some_matching_index() {
    let sequence = [1, 2, 2, 2, 2, 2, 3, 8, 8];
    assert_hit(&sequence, 2, search(&sequence, 2));
    assert_hit(&sequence, 8, search(&sequence, 8));
}

#[test]
fn test_large_sequence() {
    let sequence: Vec<i32> = (0..100_000).map(|i| i * 2).collect();
    assert_eq!(search(&sequence, 0), 0);
    assert_eq!(search(&sequence, 123_456), 61_728);
    assert_eq!(search(&sequence, 199_998), 99_999);
    assert_eq!(search(&sequence, 123_457), -1);
}

#[test]
fn test_position_form_agrees() {
    assert_eq!(search_position(&ODDS, &7), Some(3));
    assert_eq!(search_position(&ODDS, &4), None);
}
