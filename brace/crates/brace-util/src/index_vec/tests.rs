//! Tests for the IndexVec module.

use quickcheck_macros::quickcheck;

use super::*;

crate::define_idx!(TestId);

fn sample() -> IndexVec<TestId, i32> {
    [10, 20, 30].into_iter().collect()
}

// ============================================================================
// BASIC OPERATIONS
// ============================================================================

#[test]
fn test_push_returns_sequential_indices() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::new();
    assert_eq!(vec.push(1), TestId(0));
    assert_eq!(vec.push(2), TestId(1));
    assert_eq!(vec.last_idx(), Some(TestId(1)));
    assert_eq!(vec.last(), Some(&2));
}

#[test]
fn test_pop() {
    let mut vec = sample();
    assert_eq!(vec.pop(), Some((TestId(2), 30)));
    assert_eq!(vec.len(), 2);
    vec.pop();
    vec.pop();
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.last_idx(), None);
}

#[test]
fn test_get_out_of_range() {
    let vec = sample();
    assert_eq!(vec.get(TestId(1)), Some(&20));
    assert_eq!(vec.get(TestId(3)), None);
}

// ============================================================================
// CHECKED EDITS
// ============================================================================

#[test]
fn test_replace() {
    let mut vec = sample();
    assert_eq!(vec.replace(TestId(1), 99), Ok(20));
    assert_eq!(vec.as_slice(), &[10, 99, 30]);
    assert_eq!(
        vec.replace(TestId(5), 0),
        Err(IndexVecError::OutOfBounds { index: 5, length: 3 })
    );
}

#[test]
fn test_remove_shifts_tail() {
    let mut vec = sample();
    assert_eq!(vec.remove(TestId(0)), Ok(10));
    assert_eq!(vec[TestId(0)], 20);
    assert_eq!(vec[TestId(1)], 30);
    assert!(vec.remove(TestId(2)).is_err());
}

#[test]
fn test_truncate() {
    let mut vec = sample();
    assert!(vec.truncate(4).is_err());
    assert_eq!(vec.truncate(1), Ok(()));
    assert_eq!(vec.into_raw(), vec![10]);
}

#[test]
fn test_iter_enumerated() {
    let vec = sample();
    let pairs: Vec<_> = vec.iter_enumerated().map(|(i, v)| (i.0, *v)).collect();
    assert_eq!(pairs, vec![(0, 10), (1, 20), (2, 30)]);
}

#[test]
fn test_usize_index() {
    let mut vec: IndexVec<usize, &str> = IndexVec::new();
    let i = vec.push("a");
    assert_eq!(i, 0);
    assert_eq!(vec[0], "a");
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[quickcheck]
fn prop_remove_matches_vec(values: Vec<u8>, at: usize) -> bool {
    let mut expected = values.clone();
    let mut vec: IndexVec<TestId, u8> = IndexVec::from_raw(values);
    let result = vec.remove(TestId::from_usize(at));
    if at < expected.len() {
        result == Ok(expected.remove(at)) && vec.into_raw() == expected
    } else {
        result.is_err() && vec.into_raw() == expected
    }
}

#[quickcheck]
fn prop_push_pop_roundtrip(values: Vec<i64>) -> bool {
    let mut vec: IndexVec<TestId, i64> = IndexVec::new();
    for v in &values {
        vec.push(*v);
    }
    let mut popped = Vec::new();
    while let Some((_, v)) = vec.pop() {
        popped.push(v);
    }
    popped.reverse();
    popped == values
}
