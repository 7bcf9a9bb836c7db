//! Sparse vector over a [`SortedMap`].
//!
//! Entries are kept sorted by key, so every binary operation between two
//! sorted vectors is a single linear merge over the parallel arrays:
//!
//! | Operation              | Merge        | Result             |
//! |------------------------|--------------|--------------------|
//! | `dot`                  | intersection | scalar             |
//! | `elementwise_sum/diff` | union        | new vector         |
//! | `add` / `subtract`     | union        | replaces `self`    |
//! | `hadamard_prod`        | intersection | new vector         |
//!
//! # Examples
//!
//! ```rust
//! use primvec::vector::{PrimitiveVector, SortedVector};
//!
//! let a = SortedVector::from_sorted(vec![1, 2, 4], vec![11, 22, 44]).unwrap();
//! let b = SortedVector::from_sorted(vec![1, 3, 4, 5], vec![11, 33, 0, 55]).unwrap();
//!
//! let sum = a.elementwise_sum(&b);
//! assert_eq!(sum.to_string(), "{1:22, 2:22, 3:33, 4:44, 5:55}");
//!
//! let hadamard = a.hadamard_prod(&b);
//! assert_eq!(hadamard.to_string(), "{1:121, 4:0}");
//! assert_eq!(hadamard.without_zero_values(0).len(), 1);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{NarrowingCastError, PrimitiveError};
use crate::map::{SortedMap, SortedMapIterator};
use crate::primitive::{PrimitiveKey, PrimitiveValue};

use super::{PrimitiveVector, SparseMapLike, merge};

/// A sparse vector whose explicit entries are sorted by key.
///
/// Equality is exact and structural: explicit zeros count. Use
/// [`PrimitiveVector::approx_eq`] for numeric comparison.
#[derive(Clone, PartialEq)]
pub struct SortedVector<K, V> {
    map: SortedMap<K, V>,
}

static_assertions::assert_impl_all!(SortedVector<i64, f64>: Send, Sync, Clone);

impl<K: PrimitiveKey, V: PrimitiveValue> SortedVector<K, V> {
    /// Creates a vector without explicit entries.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            map: SortedMap::new(),
        }
    }

    /// Creates an empty vector with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: SortedMap::with_capacity(capacity),
        }
    }

    /// Builds a vector from strictly increasing keys and parallel values.
    ///
    /// # Errors
    ///
    /// See [`SortedMap::from_sorted`].
    pub fn from_sorted(keys: Vec<K>, values: Vec<V>) -> Result<Self, PrimitiveError> {
        SortedMap::from_sorted(keys, values).map(Self::from)
    }

    /// Builds a vector from keys in any order, sorting them once.
    ///
    /// # Errors
    ///
    /// See [`SortedMap::from_unsorted`].
    pub fn from_unsorted(keys: Vec<K>, values: Vec<V>) -> Result<Self, PrimitiveError> {
        SortedMap::from_unsorted(keys, values).map(Self::from)
    }

    /// Builds a vector holding the non-zero elements of `dense`, keyed by
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::NarrowingCast`] if a non-zero position does
    /// not fit the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primvec::vector::SortedVector;
    ///
    /// let vector = SortedVector::<i32, f64>::from_dense(&[0.0, 1.5, 0.0, 2.5]).unwrap();
    /// assert_eq!(vector.keys(), &[1, 3]);
    /// ```
    pub fn from_dense(dense: &[V]) -> Result<Self, PrimitiveError> {
        let mut keys = Vec::new();
        let mut values = Vec::new();
        for (position, &value) in dense.iter().enumerate() {
            if value != V::ZERO {
                keys.push(position_to_key(position)?);
                values.push(value);
            }
        }
        Ok(Self {
            map: SortedMap::from_sorted_unchecked(keys, values),
        })
    }

    /// Number of explicit entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no explicit entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The explicit keys, strictly increasing.
    #[inline]
    pub fn keys(&self) -> &[K] {
        self.map.keys()
    }

    /// The explicit values, parallel to [`keys`](Self::keys).
    #[inline]
    pub fn values(&self) -> &[V] {
        self.map.values()
    }

    /// Ascending iterator over the explicit entries.
    #[inline]
    pub fn iter(&self) -> SortedMapIterator<'_, K, V> {
        self.map.iter()
    }

    /// The underlying map.
    #[inline]
    pub const fn as_map(&self) -> &SortedMap<K, V> {
        &self.map
    }

    /// Unwraps the underlying map.
    #[inline]
    pub fn into_map(self) -> SortedMap<K, V> {
        self.map
    }

    /// Removes the explicit entry at `key`, making it an implicit zero.
    #[inline]
    pub fn remove(&mut self, key: K) {
        self.map.remove(key);
    }

    /// Removes every explicit entry.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Shrinks the backing arrays to the number of entries.
    #[inline]
    pub fn trim_to_size(&mut self) {
        self.map.trim_to_size();
    }

    /// Replaces the contents of `self` with a deep copy of `other`.
    pub fn set_all(&mut self, other: &Self) {
        self.map.clone_from(&other.map);
    }

    /// Combines two vectors key by key over the union of their entries.
    ///
    /// A key explicit on one side only is combined with zero on the other.
    pub fn binary_op<F: FnMut(V, V) -> V>(&self, other: &Self, f: F) -> Self {
        let (keys, values) =
            merge::union_with(self.keys(), self.values(), other.keys(), other.values(), f);
        Self {
            map: SortedMap::from_sorted_unchecked(keys, values),
        }
    }

    /// Returns `self + other` as a new vector.
    pub fn elementwise_sum(&self, other: &Self) -> Self {
        self.binary_op(other, V::wrapping_add)
    }

    /// Returns `self - other` as a new vector.
    pub fn elementwise_diff(&self, other: &Self) -> Self {
        self.binary_op(other, V::wrapping_sub)
    }

    /// Returns the elementwise product over the keys explicit on both sides.
    pub fn hadamard_prod(&self, other: &Self) -> Self {
        let (keys, values) = merge::intersect_with(
            self.keys(),
            self.values(),
            other.keys(),
            other.values(),
            V::wrapping_mul,
        );
        Self {
            map: SortedMap::from_sorted_unchecked(keys, values),
        }
    }

    /// Returns the vector without entries within `threshold` of zero.
    ///
    /// Borrows `self` when there is nothing to strip.
    pub fn without_zero_values(&self, threshold: V) -> Cow<'_, Self> {
        if !self.values().iter().any(|value| value.is_zero(threshold)) {
            return Cow::Borrowed(self);
        }
        let (keys, values): (Vec<K>, Vec<V>) = self
            .iter()
            .filter(|(_, value)| !value.is_zero(threshold))
            .unzip();
        Cow::Owned(Self {
            map: SortedMap::from_sorted_unchecked(keys, values),
        })
    }

    /// Dot product with column `column` of a row-major matrix.
    ///
    /// Key `k` pairs with `matrix[k][column]`. Negative keys and rows too
    /// short to have the column are skipped; the walk stops at the first key
    /// past the last row.
    pub fn dot_matrix_column(&self, matrix: &[Vec<V>], column: usize) -> V {
        let mut sum = V::ZERO;
        for (key, value) in self.iter() {
            match key.to_index() {
                Some(row) if row < matrix.len() => {
                    if let Some(&element) = matrix[row].get(column) {
                        sum = sum.wrapping_add(value.wrapping_mul(element));
                    }
                }
                None if key < K::ZERO => {}
                _ => break,
            }
        }
        sum
    }

    fn merge_in_place<F: FnMut(V, V) -> V>(&mut self, keys: &[K], values: &[V], f: F) {
        let (keys, values) = merge::union_with(self.keys(), self.values(), keys, values, f);
        self.map = SortedMap::from_sorted_unchecked(keys, values);
    }
}

pub(super) fn position_to_key<K: PrimitiveKey>(position: usize) -> Result<K, PrimitiveError> {
    K::from_index(position).ok_or_else(|| {
        PrimitiveError::from(NarrowingCastError {
            source_type: "usize",
            target_type: K::TYPE_NAME,
            value: position.to_string(),
        })
    })
}

impl<K: PrimitiveKey, V: PrimitiveValue> SparseMapLike<K, V> for SortedVector<K, V> {
    #[inline]
    fn entries(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.map.iter()
    }

    #[inline]
    fn num_explicit(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn contains(&self, key: K) -> bool {
        self.map.contains(key)
    }

    #[inline]
    fn sorted_view(&self) -> Option<(&[K], &[V])> {
        Some((self.map.keys(), self.map.values()))
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveVector<K, V> for SortedVector<K, V> {
    #[inline]
    fn get(&self, key: K) -> V {
        self.map.get_with_default(key, V::ZERO)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) {
        self.map.put(key, value);
    }

    #[inline]
    fn add_at(&mut self, key: K, delta: V) {
        self.map.adjust_or_put(key, delta, delta);
    }

    #[inline]
    fn apply<F: FnMut(K, V) -> V>(&mut self, f: F) {
        self.map.update_values(f);
    }

    /// Adds `other` into `self`, merging when `other` is sorted.
    fn add<O: SparseMapLike<K, V> + ?Sized>(&mut self, other: &O) {
        match other.sorted_view() {
            Some((keys, values)) => self.merge_in_place(keys, values, V::wrapping_add),
            None => {
                for (key, value) in other.entries() {
                    self.add_at(key, value);
                }
            }
        }
    }

    /// Subtracts `other` from `self`, merging when `other` is sorted.
    fn subtract<O: SparseMapLike<K, V> + ?Sized>(&mut self, other: &O) {
        match other.sorted_view() {
            Some((keys, values)) => self.merge_in_place(keys, values, V::wrapping_sub),
            None => {
                for (key, value) in other.entries() {
                    let current = PrimitiveVector::get(self, key);
                    self.map.put(key, current.wrapping_sub(value));
                }
            }
        }
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Default for SortedVector<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> From<SortedMap<K, V>> for SortedVector<K, V> {
    #[inline]
    fn from(map: SortedMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> FromIterator<(K, V)> for SortedVector<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<'a, K: PrimitiveKey, V: PrimitiveValue> IntoIterator for &'a SortedVector<K, V> {
    type Item = (K, V);
    type IntoIter = SortedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug + Copy, V: fmt::Debug + Copy> fmt::Debug for SortedVector<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedVector")
            .field("entries", &self.map)
            .finish()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> fmt::Display for SortedVector<K, V> {
    /// Renders as `{key:value, key:value}` in ascending key order.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}:{value}")?;
        }
        write!(formatter, "}}")
    }
}
