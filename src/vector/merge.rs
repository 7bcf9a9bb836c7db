//! Two-pointer merges over sorted parallel arrays.
//!
//! Every function here takes one or two `(keys, values)` pairs whose key
//! slices are strictly increasing and walks them in a single pass. Nothing is
//! sorted or searched: the cost is O(n1 + n2).
//!
//! # Examples
//!
//! ```rust
//! use primvec::vector::merge;
//!
//! let left = ([1, 3, 5], [1.0, 3.0, 5.0]);
//! let right = ([3, 4, 5], [2.0, 2.0, 2.0]);
//!
//! assert_eq!(merge::dot(&left.0, &left.1, &right.0, &right.1), 16.0);
//! assert_eq!(merge::count_unique(&left.0, &right.0), 4);
//! assert_eq!(merge::count_common(&left.0, &right.0), 2);
//! ```

use std::cmp::Ordering;

use crate::primitive::{PrimitiveKey, PrimitiveValue};

/// Sum of `v1 * v2` over keys present on both sides.
pub fn dot<K: PrimitiveKey, V: PrimitiveValue>(
    left_keys: &[K],
    left_values: &[V],
    right_keys: &[K],
    right_values: &[V],
) -> V {
    debug_assert_eq!(left_keys.len(), left_values.len());
    debug_assert_eq!(right_keys.len(), right_values.len());

    let mut sum = V::ZERO;
    let (mut i, mut j) = (0, 0);
    while i < left_keys.len() && j < right_keys.len() {
        match left_keys[i].cmp(&right_keys[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum = sum.wrapping_add(left_values[i].wrapping_mul(right_values[j]));
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Dot product of a sorted sparse side with a dense slice.
///
/// Negative keys are skipped. The walk stops at the first key that is past
/// the end of `dense` or beyond the addressable range.
pub fn dot_dense<K: PrimitiveKey, V: PrimitiveValue>(keys: &[K], values: &[V], dense: &[V]) -> V {
    let mut sum = V::ZERO;
    for (&key, &value) in keys.iter().zip(values) {
        match key.to_index() {
            Some(index) if index < dense.len() => {
                sum = sum.wrapping_add(value.wrapping_mul(dense[index]));
            }
            None if key < K::ZERO => {}
            _ => break,
        }
    }
    sum
}

/// Union merge: every key of either side, combined with `f`.
///
/// A key missing on one side contributes [`Primitive::ZERO`] there, so
/// `f(v, 0)` or `f(0, v)` is stored. The result keys are strictly increasing.
///
/// [`Primitive::ZERO`]: crate::primitive::Primitive::ZERO
pub fn union_with<K, V, F>(
    left_keys: &[K],
    left_values: &[V],
    right_keys: &[K],
    right_values: &[V],
    mut f: F,
) -> (Vec<K>, Vec<V>)
where
    K: PrimitiveKey,
    V: PrimitiveValue,
    F: FnMut(V, V) -> V,
{
    let size = count_unique(left_keys, right_keys);
    let mut keys = Vec::with_capacity(size);
    let mut values = Vec::with_capacity(size);

    let (mut i, mut j) = (0, 0);
    while i < left_keys.len() && j < right_keys.len() {
        match left_keys[i].cmp(&right_keys[j]) {
            Ordering::Less => {
                keys.push(left_keys[i]);
                values.push(f(left_values[i], V::ZERO));
                i += 1;
            }
            Ordering::Greater => {
                keys.push(right_keys[j]);
                values.push(f(V::ZERO, right_values[j]));
                j += 1;
            }
            Ordering::Equal => {
                keys.push(left_keys[i]);
                values.push(f(left_values[i], right_values[j]));
                i += 1;
                j += 1;
            }
        }
    }
    for (&key, &value) in left_keys[i..].iter().zip(&left_values[i..]) {
        keys.push(key);
        values.push(f(value, V::ZERO));
    }
    for (&key, &value) in right_keys[j..].iter().zip(&right_values[j..]) {
        keys.push(key);
        values.push(f(V::ZERO, value));
    }

    debug_assert_eq!(keys.len(), size);
    (keys, values)
}

/// Intersection merge: only keys present on both sides, combined with `f`.
pub fn intersect_with<K, V, F>(
    left_keys: &[K],
    left_values: &[V],
    right_keys: &[K],
    right_values: &[V],
    mut f: F,
) -> (Vec<K>, Vec<V>)
where
    K: PrimitiveKey,
    V: PrimitiveValue,
    F: FnMut(V, V) -> V,
{
    let size = count_common(left_keys, right_keys);
    let mut keys = Vec::with_capacity(size);
    let mut values = Vec::with_capacity(size);

    let (mut i, mut j) = (0, 0);
    while i < left_keys.len() && j < right_keys.len() {
        match left_keys[i].cmp(&right_keys[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                keys.push(left_keys[i]);
                values.push(f(left_values[i], right_values[j]));
                i += 1;
                j += 1;
            }
        }
    }
    (keys, values)
}

/// Number of distinct keys across both sorted key slices.
pub fn count_unique<K: Ord>(left: &[K], right: &[K]) -> usize {
    left.len() + right.len() - count_common(left, right)
}

/// Number of keys present in both sorted key slices.
pub fn count_common<K: Ord>(left: &[K], right: &[K]) -> usize {
    let mut common = 0;
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                common += 1;
                i += 1;
                j += 1;
            }
        }
    }
    common
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], &[], 0, 0)]
    #[case(&[1, 2, 3], &[], 3, 0)]
    #[case(&[1, 2, 3], &[1, 2, 3], 3, 3)]
    #[case(&[1, 3, 5], &[2, 4, 6], 6, 0)]
    #[case(&[1, 4, 9], &[4, 9, 16, 25], 5, 2)]
    fn test_counts(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] unique: usize,
        #[case] common: usize,
    ) {
        assert_eq!(count_unique(left, right), unique);
        assert_eq!(count_common(left, right), common);
        assert_eq!(count_unique(right, left), unique);
    }

    #[rstest]
    fn test_union_with_fills_missing_side_with_zero() {
        let (keys, values) = union_with(&[1_i64, 2, 4], &[11, 22, 44], &[1, 3, 4, 5], &[11, 33, 0, 55], |a, b| a - b);
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
        assert_eq!(values, vec![0, 22, -33, 44, -55]);
    }

    #[rstest]
    fn test_intersect_with_keeps_common_keys_only() {
        let (keys, values) =
            intersect_with(&[1, 2, 4], &[2.0_f32, 3.0, 4.0], &[0, 2, 4, 8], &[1.0, 5.0, 0.5, 1.0], |a, b| a * b);
        assert_eq!(keys, vec![2, 4]);
        assert_eq!(values, vec![15.0, 2.0]);
    }

    #[rstest]
    fn test_dot_dense_skips_negative_keys_and_stops_past_the_end() {
        let keys = [-3_i32, 0, 2, 7, 9];
        let values = [100, 1, 2, 3, 4];
        let dense = [10, 20, 30];
        assert_eq!(dot_dense(&keys, &values, &dense), 10 + 60);
    }

    #[rstest]
    fn test_dot_dense_stops_at_unaddressable_long_keys() {
        let keys = [0_i64, 1 << 40];
        let values = [2.0, 5.0];
        assert_eq!(dot_dense(&keys, &values, &[3.0, 4.0]), 6.0);
    }
}
