//! Validated sorted sequences.

use kata::{KataError, SortedSequence};

#[test]
fn test_search_through_wrapper() {
    let sorted = SortedSequence::new(vec![1, 3, 5, 7, 9, 11]).unwrap();
    assert_eq!(sorted.search(7), 3);
    assert_eq!(sorted.search(4), -1);
}

#[test]
fn test_rejection_names_position() {
    let err = SortedSequence::new(vec![1, 3, 2]).unwrap_err();
    assert_eq!(err, KataError::Unsorted { position: 1 });
    assert_eq!(err.to_string(), "sequence not sorted at position 1");
}

#[test]
fn test_descending_rejected_at_zero() {
    assert_eq!(
        SortedSequence::new(vec![3, 2, 1]),
        Err(KataError::Unsorted { position: 0 })
    );
}

#[test]
fn test_derefs_to_slice() {
    let sorted = SortedSequence::new(vec![2, 4, 6]).unwrap();
    assert_eq!(sorted.first(), Some(&2));
    assert_eq!(sorted.iter().sum::<i32>(), 12);
    assert_eq!(sorted.into_inner(), vec![2, 4, 6]);
}

#[test]
fn test_works_for_strings() {
    let sorted = SortedSequence::new(vec!["apple", "banana", "cherry"]).unwrap();
    assert_eq!(sorted.position(&"banana"), Some(1));
    assert_eq!(sorted.position(&"date"), None);
}

#[test]
fn test_element_type_needs_only_ord() {
    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct Version(u16, u16);

    let versions = vec![Version(1, 0), Version(1, 4), Version(2, 0)];
    assert_eq!(kata::search_position(&versions, &Version(1, 4)), Some(1));

    let sorted = SortedSequence::new(versions).unwrap();
    assert_eq!(sorted.position(&Version(2, 0)), Some(2));
    assert_eq!(sorted.position(&Version(3, 0)), None);
}
