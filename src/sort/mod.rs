//! In-place quicksort over a pair of parallel arrays.
//!
//! Sparse containers store their entries as two parallel arrays: a key array
//! and a value array where `values[i]` belongs to `keys[i]`. The functions in
//! this module sort such a pair by one of the two arrays and mirror every swap
//! in the other, so the association survives the sort.
//!
//! # Algorithm
//!
//! Quicksort with the rightmost element of each range as pivot and a
//! Lomuto partition (elements `<=` the pivot move left). Typical cost is
//! O(n log n); adversarial or heavily duplicated input degrades to O(n²),
//! which is acceptable for batch construction of small and medium vectors.
//! Each round recurses into the smaller partition and loops over the larger
//! one, so the stack depth stays O(log n) even in the worst case.
//!
//! # Descending Order
//!
//! Descending sorts negate the sort array, sort ascending and negate back.
//! This is only order-reversing where negation is: integer `MIN` negates to
//! itself and must not appear in an array sorted in descending order.
//!
//! # Examples
//!
//! ```rust
//! use primvec::sort::{sort_keys_asc, sort_keys_desc};
//!
//! let mut keys = vec![3, 1, 2];
//! let mut values = vec![30.0, 10.0, 20.0];
//! sort_keys_asc(&mut keys, &mut values);
//! assert_eq!(keys, vec![1, 2, 3]);
//! assert_eq!(values, vec![10.0, 20.0, 30.0]);
//!
//! sort_keys_desc(&mut keys, &mut values);
//! assert_eq!(keys, vec![3, 2, 1]);
//! assert_eq!(values, vec![30.0, 20.0, 10.0]);
//! ```

use crate::error::PrimitiveError;
use crate::primitive::{Primitive, PrimitiveKey};

// =============================================================================
// Key-Ordered Sorts
// =============================================================================

/// Sorts `keys` ascending, mirroring every swap in `values`.
///
/// # Panics
///
/// Panics if `keys` and `values` differ in length.
pub fn sort_keys_asc<K: Primitive, V>(keys: &mut [K], values: &mut [V]) {
    assert_same_length(keys.len(), values.len());
    quicksort(keys, values, 0, keys.len());
}

/// Sorts the prefix `keys[..top]` ascending, mirroring swaps in `values`.
///
/// Positions at or after `top` are left untouched in both arrays.
///
/// # Panics
///
/// Panics if the arrays differ in length or `top` exceeds their length.
///
/// # Examples
///
/// ```rust
/// use primvec::sort::sort_keys_asc_top;
///
/// let mut keys = vec![5_i64, 4, 3, 2, 1];
/// let mut values = vec![50, 40, 30, 20, 10];
/// sort_keys_asc_top(&mut keys, &mut values, 3);
/// assert_eq!(keys, vec![3, 4, 5, 2, 1]);
/// assert_eq!(values, vec![30, 40, 50, 20, 10]);
/// ```
pub fn sort_keys_asc_top<K: Primitive, V>(keys: &mut [K], values: &mut [V], top: usize) {
    assert_same_length(keys.len(), values.len());
    assert_top_in_range(top, keys.len());
    quicksort(keys, values, 0, top);
}

/// Sorts `keys` descending, mirroring every swap in `values`.
///
/// # Panics
///
/// Panics if `keys` and `values` differ in length.
pub fn sort_keys_desc<K: Primitive, V>(keys: &mut [K], values: &mut [V]) {
    assert_same_length(keys.len(), values.len());
    let top = keys.len();
    sort_desc(keys, values, top);
}

/// Sorts the prefix `keys[..top]` descending, mirroring swaps in `values`.
///
/// # Panics
///
/// Panics if the arrays differ in length or `top` exceeds their length.
pub fn sort_keys_desc_top<K: Primitive, V>(keys: &mut [K], values: &mut [V], top: usize) {
    assert_same_length(keys.len(), values.len());
    assert_top_in_range(top, keys.len());
    sort_desc(keys, values, top);
}

// =============================================================================
// Value-Ordered Sorts
// =============================================================================

/// Sorts `values` ascending, mirroring every swap in `keys`.
///
/// `NaN` values compare false against every pivot and collect to the right
/// of each partition; their final position is unspecified.
///
/// # Panics
///
/// Panics if `values` and `keys` differ in length.
///
/// # Examples
///
/// ```rust
/// use primvec::sort::sort_values_asc;
///
/// let mut values = vec![0.5, -1.0, 2.0];
/// let mut keys = vec![0, 1, 2];
/// sort_values_asc(&mut values, &mut keys);
/// assert_eq!(keys, vec![1, 0, 2]);
/// ```
pub fn sort_values_asc<V: Primitive, K>(values: &mut [V], keys: &mut [K]) {
    assert_same_length(values.len(), keys.len());
    quicksort(values, keys, 0, values.len());
}

/// Sorts `values` descending, mirroring every swap in `keys`.
///
/// # Panics
///
/// Panics if `values` and `keys` differ in length.
pub fn sort_values_desc<V: Primitive, K>(values: &mut [V], keys: &mut [K]) {
    assert_same_length(values.len(), keys.len());
    let top = values.len();
    sort_desc(values, keys, top);
}

/// Builds the index array `[0, 1, .., length)`.
///
/// Typically paired with [`sort_values_desc`] to obtain the positions of a
/// dense array ordered by value.
///
/// # Errors
///
/// Returns [`PrimitiveError::NarrowingCast`] if `length - 1` does not fit the
/// key type.
///
/// # Examples
///
/// ```rust
/// use primvec::sort::{index_array, sort_values_desc};
///
/// let mut scores = vec![0.2, 0.9, 0.5];
/// let mut order: Vec<i32> = index_array(scores.len()).unwrap();
/// sort_values_desc(&mut scores, &mut order);
/// assert_eq!(order, vec![1, 2, 0]);
/// ```
pub fn index_array<K: PrimitiveKey>(length: usize) -> Result<Vec<K>, PrimitiveError> {
    (0..length)
        .map(|position| {
            K::from_index(position).ok_or_else(|| {
                PrimitiveError::NarrowingCast(crate::error::NarrowingCastError {
                    source_type: "usize",
                    target_type: K::TYPE_NAME,
                    value: position.to_string(),
                })
            })
        })
        .collect()
}

// =============================================================================
// Internals
// =============================================================================

#[inline]
fn assert_same_length(sorted: usize, mirrored: usize) {
    assert_eq!(
        sorted, mirrored,
        "parallel arrays must have the same length"
    );
}

#[inline]
fn assert_top_in_range(top: usize, length: usize) {
    assert!(top <= length, "top {top} exceeds array length {length}");
}

fn sort_desc<A: Primitive, B>(primary: &mut [A], secondary: &mut [B], top: usize) {
    negate_prefix(primary, top);
    quicksort(primary, secondary, 0, top);
    negate_prefix(primary, top);
}

fn negate_prefix<A: Primitive>(array: &mut [A], top: usize) {
    for element in &mut array[..top] {
        *element = element.negate();
    }
}

/// Sorts `primary[left..right)` ascending, swapping `secondary` in lockstep.
fn quicksort<A: PartialOrd + Copy, B>(
    primary: &mut [A],
    secondary: &mut [B],
    mut left: usize,
    mut right: usize,
) {
    while right - left > 1 {
        let pivot = partition(primary, secondary, left, right - 1);
        if pivot - left < right - pivot {
            quicksort(primary, secondary, left, pivot);
            left = pivot + 1;
        } else {
            quicksort(primary, secondary, pivot + 1, right);
            right = pivot;
        }
    }
}

/// Partitions `[left, last]` around `primary[last]` and returns the pivot's
/// final position.
fn partition<A: PartialOrd + Copy, B>(
    primary: &mut [A],
    secondary: &mut [B],
    left: usize,
    last: usize,
) -> usize {
    let pivot = primary[last];
    let mut store = left;
    for position in left..last {
        if primary[position] <= pivot {
            swap_both(primary, secondary, position, store);
            store += 1;
        }
    }
    swap_both(primary, secondary, store, last);
    store
}

#[inline]
fn swap_both<A, B>(primary: &mut [A], secondary: &mut [B], first: usize, second: usize) {
    primary.swap(first, second);
    secondary.swap(first, second);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![70])]
    #[case(vec![2, 1], vec![20, 10])]
    #[case(vec![1, 2, 3, 4], vec![10, 20, 30, 40])]
    #[case(vec![4, 3, 2, 1], vec![40, 30, 20, 10])]
    #[case(vec![3, -1, 3, 0], vec![30, -10, 30, 0])]
    fn test_sort_keys_asc_keeps_pairs_together(#[case] keys: Vec<i32>, #[case] values: Vec<i64>) {
        let mut keys = keys;
        let mut values = values;
        sort_keys_asc(&mut keys, &mut values);

        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        for (key, value) in keys.iter().zip(&values) {
            assert_eq!(i64::from(*key) * 10, *value);
        }
    }

    #[rstest]
    fn test_sort_keys_desc_top_leaves_tail_untouched() {
        let mut keys = vec![1_i32, 5, 3, 9, 0];
        let mut values = vec![1.0, 5.0, 3.0, 9.0, 0.0];
        sort_keys_desc_top(&mut keys, &mut values, 3);

        assert_eq!(keys, vec![5, 3, 1, 9, 0]);
        assert_eq!(values, vec![5.0, 3.0, 1.0, 9.0, 0.0]);
    }

    #[rstest]
    fn test_sort_values_desc_mirrors_keys() {
        let mut values = vec![0.1_f32, 0.7, 0.3];
        let mut keys = vec![10_i64, 20, 30];
        sort_values_desc(&mut values, &mut keys);

        assert_eq!(values, vec![0.7, 0.3, 0.1]);
        assert_eq!(keys, vec![20, 30, 10]);
    }

    #[rstest]
    fn test_already_sorted_input_stays_sorted() {
        let mut keys: Vec<i64> = (0..5_000).collect();
        let mut values: Vec<i64> = keys.clone();
        sort_keys_asc(&mut keys, &mut values);
        assert_eq!(keys, values);
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    #[should_panic(expected = "parallel arrays must have the same length")]
    fn test_mismatched_lengths_panic() {
        let mut keys = vec![1, 2, 3];
        let mut values = vec![1.0, 2.0];
        sort_keys_asc(&mut keys, &mut values);
    }

    #[rstest]
    #[should_panic(expected = "exceeds array length")]
    fn test_top_beyond_length_panics() {
        let mut keys = vec![1, 2];
        let mut values = vec![1, 2];
        sort_keys_asc_top(&mut keys, &mut values, 3);
    }

    #[rstest]
    fn test_index_array() {
        let indices: Vec<i64> = index_array(4).unwrap();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(index_array::<i32>(0).unwrap().is_empty());
    }
}
