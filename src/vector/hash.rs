//! Sparse vector over a [`PrimitiveHashMap`].
//!
//! Lookups are O(1) expected but entries come out in slot order, so binary
//! operations walk one side and probe the other instead of merging.

use std::borrow::Cow;

use crate::error::PrimitiveError;
use crate::map::{PrimitiveHashMap, PrimitiveHashMapIterator};
use crate::primitive::{PrimitiveKey, PrimitiveValue};

use super::sorted::position_to_key;
use super::{PrimitiveVector, SparseMapLike};

/// A sparse vector backed by an open-addressing hash map.
///
/// Equality compares explicit entries regardless of table layout.
///
/// # Examples
///
/// ```rust
/// use primvec::vector::{HashVector, PrimitiveVector};
///
/// let mut counts = HashVector::<i64, i32>::new();
/// for token in [7, 3, 7, 7, 1] {
///     counts.add_at(token, 1);
/// }
/// assert_eq!(counts.get(7), 3);
/// assert_eq!(counts.get(2), 0);
/// assert_eq!(counts.sum(), 5);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct HashVector<K: PrimitiveKey, V: PrimitiveValue> {
    map: PrimitiveHashMap<K, V>,
}

static_assertions::assert_impl_all!(HashVector<i32, f32>: Send, Sync, Clone);

impl<K: PrimitiveKey, V: PrimitiveValue> HashVector<K, V> {
    /// Creates a vector without explicit entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: PrimitiveHashMap::new(),
        }
    }

    /// Creates an empty vector whose table has at least `capacity` slots.
    ///
    /// # Errors
    ///
    /// See [`PrimitiveHashMap::with_capacity`].
    pub fn with_capacity(capacity: usize) -> Result<Self, PrimitiveError> {
        PrimitiveHashMap::with_capacity(capacity).map(Self::from)
    }

    /// Builds a vector holding the non-zero elements of `dense`, keyed by
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::NarrowingCast`] if a non-zero position does
    /// not fit the key type.
    pub fn from_dense(dense: &[V]) -> Result<Self, PrimitiveError> {
        let mut vector = Self::new();
        for (position, &value) in dense.iter().enumerate() {
            if value != V::ZERO {
                vector.map.put(position_to_key(position)?, value);
            }
        }
        Ok(vector)
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

    /// Iterator over the explicit entries in slot order.
    #[inline]
    pub fn iter(&self) -> PrimitiveHashMapIterator<'_, K, V> {
        self.map.iter()
    }

    /// The underlying map.
    #[inline]
    pub const fn as_map(&self) -> &PrimitiveHashMap<K, V> {
        &self.map
    }

    /// Unwraps the underlying map.
    #[inline]
    pub fn into_map(self) -> PrimitiveHashMap<K, V> {
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

    /// Replaces the contents of `self` with a deep copy of `other`.
    pub fn set_all(&mut self, other: &Self) {
        self.map.clone_from(&other.map);
    }

    /// Returns `self + other` as a new vector.
    pub fn elementwise_sum(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add(other);
        result
    }

    /// Returns `self - other` as a new vector.
    pub fn elementwise_diff(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    /// Returns the elementwise product over the keys explicit on both sides.
    pub fn hadamard_prod(&self, other: &Self) -> Self {
        self.iter()
            .filter(|&(key, _)| other.map.contains(key))
            .map(|(key, value)| (key, value.wrapping_mul(other.map.get_with_default(key, V::ZERO))))
            .collect()
    }

    /// Returns the vector without entries within `threshold` of zero.
    ///
    /// Borrows `self` when there is nothing to strip.
    pub fn without_zero_values(&self, threshold: V) -> Cow<'_, Self> {
        if !self.iter().any(|(_, value)| value.is_zero(threshold)) {
            return Cow::Borrowed(self);
        }
        Cow::Owned(
            self.iter()
                .filter(|(_, value)| !value.is_zero(threshold))
                .collect(),
        )
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Default for HashVector<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> SparseMapLike<K, V> for HashVector<K, V> {
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
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveVector<K, V> for HashVector<K, V> {
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
}

impl<K: PrimitiveKey, V: PrimitiveValue> From<PrimitiveHashMap<K, V>> for HashVector<K, V> {
    #[inline]
    fn from(map: PrimitiveHashMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> FromIterator<(K, V)> for HashVector<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<'a, K: PrimitiveKey, V: PrimitiveValue> IntoIterator for &'a HashVector<K, V> {
    type Item = (K, V);
    type IntoIter = PrimitiveHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
