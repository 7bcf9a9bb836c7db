//! Unit tests for SortedMap.
//!
//! Covers construction paths, the lookup defaults of both value families,
//! and the ordering invariant across mixed insertions and removals.

#![cfg(feature = "map")]

use primvec::error::PrimitiveError;
use primvec::map::{PrimitiveMap, SortedMap};
use rstest::rstest;

#[rstest]
fn test_absent_float_lookup_is_nan() {
    let map: SortedMap<i32, f64> = SortedMap::new();
    assert!(map.get(1).is_nan());
    assert_eq!(map.get_with_default(1, -1.0), -1.0);
}

#[rstest]
fn test_absent_integer_lookup_is_zero() {
    let map: SortedMap<i64, i64> = [(5, 50)].into_iter().collect();
    assert_eq!(map.get(4), 0);
    assert_eq!(map.get(5), 50);
}

#[rstest]
fn test_mixed_operations_keep_keys_sorted() {
    let mut map = SortedMap::<i32, i32>::new();
    for key in [50, -3, 17, 8, 99, 0, 17, -40] {
        map.put(key, key * 2);
    }
    map.remove(8);
    map.remove(1000);
    map.put(9, 18);

    assert_eq!(map.keys(), &[-40, -3, 0, 9, 17, 50, 99]);
    assert!(map.iter().all(|(key, value)| value == key * 2));
}

#[rstest]
#[case(vec![1, 2, 2], PrimitiveError::UnsortedKeys { position: 2 })]
#[case(vec![3, 1], PrimitiveError::UnsortedKeys { position: 1 })]
fn test_from_sorted_rejects_unsorted_input(#[case] keys: Vec<i32>, #[case] expected: PrimitiveError) {
    let values = vec![0.0; keys.len()];
    assert_eq!(SortedMap::from_sorted(keys, values).unwrap_err(), expected);
}

#[rstest]
fn test_from_unsorted_matches_incremental_puts() {
    let keys = vec![9_i64, 2, 7, -1, 4];
    let values = vec![0.9_f32, 0.2, 0.7, -0.1, 0.4];

    let bulk = SortedMap::from_unsorted(keys.clone(), values.clone()).unwrap();
    let incremental: SortedMap<i64, f32> = keys.into_iter().zip(values).collect();

    assert_eq!(bulk, incremental);
}

#[rstest]
fn test_from_unsorted_reports_length_mismatch() {
    let error = SortedMap::<i32, i32>::from_unsorted(vec![1, 2], vec![1]).unwrap_err();
    assert_eq!(error, PrimitiveError::LengthMismatch { keys: 2, values: 1 });
}

#[rstest]
fn test_contract_exports_keys_and_values_in_order() {
    let map: SortedMap<i32, i64> = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
    assert_eq!(PrimitiveMap::to_key_vec(&map), vec![1, 2, 3]);
    assert_eq!(PrimitiveMap::to_value_vec(&map), vec![10, 20, 30]);
}

#[rstest]
fn test_clear_then_reuse() {
    let mut map: SortedMap<i32, f64> = (0..32).map(|key| (key, f64::from(key))).collect();
    map.clear();
    assert!(map.is_empty());
    map.put(1, 1.0);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(1), 1.0);
}

#[rstest]
fn test_into_parts_returns_parallel_arrays() {
    let map: SortedMap<i64, i32> = [(2, 4), (1, 2)].into_iter().collect();
    let (keys, values) = map.into_parts();
    assert_eq!(keys, vec![1, 2]);
    assert_eq!(values, vec![2, 4]);
}
