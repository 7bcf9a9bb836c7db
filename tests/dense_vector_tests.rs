//! Unit tests for DenseVector.

#![cfg(feature = "vector")]

use primvec::error::PrimitiveError;
use primvec::vector::{DenseVector, PrimitiveVector, SortedVector, SparseMapLike};
use rstest::rstest;

#[rstest]
fn test_entries_cover_every_position() {
    let vector = DenseVector::<i32, i64>::from_vec(vec![0, 5, 0, 7]);
    let entries: Vec<(i32, i64)> = vector.entries().collect();
    assert_eq!(entries, vec![(0, 0), (1, 5), (2, 0), (3, 7)]);
    assert!(vector.contains(2));
    assert!(!vector.contains(4));
    assert!(!vector.contains(-1));
}

#[rstest]
fn test_add_at_grows_and_accumulates() {
    let mut vector = DenseVector::<i64, f64>::new();
    vector.add_at(2, 1.0);
    vector.add_at(2, 0.5);
    vector.add_at(0, -1.0);
    assert_eq!(vector.as_slice(), &[-1.0, 0.0, 1.5]);
}

#[rstest]
fn test_dot_dense_uses_common_prefix() {
    let vector = DenseVector::<i32, i32>::from_vec(vec![1, 2, 3]);
    assert_eq!(vector.dot_dense(&[10, 10]), 30);
    assert_eq!(vector.dot_dense(&[1, 1, 1, 100]), 6);
}

#[rstest]
#[case(-1)]
#[case(i64::from(i32::MAX) + 1)]
fn test_try_set_reports_unaddressable_keys(#[case] key: i64) {
    let mut vector = DenseVector::<i64, i32>::new();
    let error = vector.try_set(key, 1).unwrap_err();
    assert!(matches!(error, PrimitiveError::NarrowingCast(_)));
    assert!(vector.is_empty());
}

#[rstest]
fn test_aggregates_and_scale() {
    let mut vector = DenseVector::<i32, f32>::from_vec(vec![1.0, -4.0, 2.0]);
    assert_eq!(vector.inf_norm(), 4.0);
    assert_eq!(vector.argmax(), Some(2));
    vector.scale(0.5);
    assert_eq!(vector.to_vec(), vec![0.5, -2.0, 1.0]);
}

#[rstest]
fn test_lookup_index_with_integer_delta() {
    let vector = DenseVector::<i64, i32>::from_vec(vec![10, 20, 30]);
    assert_eq!(vector.lookup_index(21, 1), Some(1));
    assert_eq!(vector.lookup_index(25, 1), None);
}

#[rstest]
fn test_dot_with_sorted_vector_matches_dense_dot() {
    let dense = DenseVector::<i32, i64>::from_vec(vec![0, 5, 0, 7, 2]);
    let sparse = SortedVector::from_sorted(vec![1, 3, 9], vec![2, 3, 100]).unwrap();

    assert_eq!(dense.dot(&sparse), 31);
    assert_eq!(sparse.dot(&dense), 31);
    assert_eq!(sparse.dot_dense(dense.as_slice()), 31);
}
