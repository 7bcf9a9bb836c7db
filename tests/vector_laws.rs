#![cfg(feature = "vector")]
//! Property-based tests for the vector algebra.
//!
//! This module verifies that merge-based arithmetic on SortedVector agrees
//! with a key-by-key reference, that sparse and dense dot products agree,
//! and that zero stripping is idempotent.

use primvec::vector::{HashVector, PrimitiveVector, SortedVector, SparseMapLike};
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

const KEY_RANGE: i32 = 10_000;

fn arbitrary_entries() -> impl Strategy<Value = BTreeMap<i32, i64>> {
    prop::collection::btree_map(0..KEY_RANGE, -1_000..1_000_i64, 0..1_000)
}

fn arbitrary_float_entries() -> impl Strategy<Value = BTreeMap<i32, f64>> {
    prop::collection::btree_map(0..KEY_RANGE, -100.0..100.0_f64, 0..1_000)
}

fn sorted_vector<V: primvec::primitive::PrimitiveValue>(entries: &BTreeMap<i32, V>) -> SortedVector<i32, V> {
    let (keys, values) = entries.iter().map(|(&key, &value)| (key, value)).unzip();
    SortedVector::from_sorted(keys, values).unwrap()
}

fn dense(entries: &BTreeMap<i32, i64>) -> Vec<i64> {
    let mut dense = vec![0; KEY_RANGE as usize];
    for (&key, &value) in entries {
        dense[key as usize] = value;
    }
    dense
}

// =============================================================================
// Merge Law: elementwise_sum(a, b)[k] == a[k] + b[k] for every key
// =============================================================================

proptest! {
    #[test]
    fn prop_elementwise_sum_is_keywise(left in arbitrary_entries(), right in arbitrary_entries()) {
        let a = sorted_vector(&left);
        let b = sorted_vector(&right);
        let sum = a.elementwise_sum(&b);

        prop_assert!(sum.keys().windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(sum.len() <= a.len() + b.len());
        for key in left.keys().chain(right.keys()) {
            prop_assert_eq!(sum.get(*key), a.get(*key) + b.get(*key));
        }
        let union: std::collections::BTreeSet<i32> = left.keys().chain(right.keys()).copied().collect();
        prop_assert_eq!(sum.len(), union.len());
    }
}

proptest! {
    #[test]
    fn prop_hadamard_is_keywise_over_intersection(left in arbitrary_entries(), right in arbitrary_entries()) {
        let product = sorted_vector(&left).hadamard_prod(&sorted_vector(&right));
        let expected: Vec<(i32, i64)> = left
            .iter()
            .filter_map(|(key, value)| right.get(key).map(|other| (*key, value * other)))
            .collect();
        prop_assert_eq!(product.iter().collect::<Vec<_>>(), expected);
    }
}

proptest! {
    #[test]
    fn prop_in_place_add_agrees_across_backends(left in arbitrary_entries(), right in arbitrary_entries()) {
        let mut merged = sorted_vector(&left);
        merged.add(&sorted_vector(&right));

        let mut probed: HashVector<i32, i64> = left.iter().map(|(&key, &value)| (key, value)).collect();
        probed.add(&sorted_vector(&right));

        prop_assert_eq!(merged.len(), probed.len());
        for (key, value) in merged.iter() {
            prop_assert_eq!(probed.get(key), value);
        }
    }
}

// =============================================================================
// Dot Law: sparse-sparse dot equals sparse-dense dot
// =============================================================================

proptest! {
    #[test]
    fn prop_sparse_dot_matches_dense_dot(left in arbitrary_entries(), right in arbitrary_entries()) {
        let a = sorted_vector(&left);
        let b = sorted_vector(&right);

        let sparse = a.dot(&b);
        prop_assert_eq!(sparse, a.dot_dense(&dense(&right)));
        prop_assert_eq!(sparse, b.dot_dense(&dense(&left)));
        prop_assert_eq!(sparse, b.dot(&a));
    }
}

proptest! {
    #[test]
    fn prop_float_dot_is_symmetric_within_tolerance(left in arbitrary_float_entries(), right in arbitrary_float_entries()) {
        let a = sorted_vector(&left);
        let b: HashVector<i32, f64> = right.iter().map(|(&key, &value)| (key, value)).collect();
        let merged = a.dot(&sorted_vector(&right));
        let probed = a.dot(&b);
        prop_assert!((merged - probed).abs() <= 1e-6 * (1.0 + merged.abs()));
    }
}

// =============================================================================
// Strip Law: without_zero_values is idempotent and removes only zeros
// =============================================================================

proptest! {
    #[test]
    fn prop_strip_is_idempotent(entries in prop::collection::btree_map(0..KEY_RANGE, -2..3_i64, 0..200)) {
        let vector = sorted_vector(&entries);
        let once = vector.without_zero_values(0).into_owned();
        let twice = once.without_zero_values(0).into_owned();

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.values().iter().all(|&value| value != 0));
        prop_assert_eq!(once.num_explicit(), entries.values().filter(|&&value| value != 0).count());
        prop_assert!(once.approx_eq(&vector, 0));
    }
}
