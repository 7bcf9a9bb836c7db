//! Sorted dual-array map.
//!
//! [`SortedMap`] stores its entries as two parallel vectors, `keys` and
//! `values`, where `values[i]` belongs to `keys[i]` and `keys` is strictly
//! increasing at all times. Lookups binary-search the key vector; a new key is
//! shift-inserted at its insertion point, so single-element updates never
//! re-sort. The dual-array sort is used only by
//! [`SortedMap::from_unsorted`], the explicit batch path.
//!
//! The structure favors read-heavy use: build once, then look up and iterate
//! many times. Iteration is ascending by key and allocation-free.
//!
//! # Examples
//!
//! ```rust
//! use primvec::map::SortedMap;
//!
//! let mut map = SortedMap::new();
//! map.put(5_i64, 50_i32);
//! map.put(1, 10);
//! map.put(3, 30);
//!
//! assert_eq!(map.keys(), &[1, 3, 5]);
//! assert_eq!(map.get(3), 30);
//! assert_eq!(map.get(4), 0);
//! assert_eq!(map.get_with_default(4, -1), -1);
//!
//! let pairs: Vec<(i64, i32)> = map.iter().collect();
//! assert_eq!(pairs, vec![(1, 10), (3, 30), (5, 50)]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::PrimitiveError;
use crate::primitive::{PrimitiveKey, PrimitiveValue};
use crate::sort::sort_keys_asc;

use super::PrimitiveMap;

/// Capacity allocated by the first growth of an empty map.
const INITIAL_CAPACITY: usize = 8;

/// A map from primitive keys to primitive values kept as sorted parallel
/// arrays.
///
/// # Invariants
///
/// - `keys` is strictly increasing.
/// - `keys.len() == values.len()`; the length is the number of entries.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `get` / `contains` | O(log n)   |
/// | `put` (overwrite)  | O(log n)   |
/// | `put` (new key)    | O(n)       |
/// | `remove`           | O(n)       |
/// | `iter`             | O(n)       |
///
/// Cloning is a deep copy of both arrays.
#[derive(Clone, PartialEq)]
pub struct SortedMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

static_assertions::assert_impl_all!(SortedMap<i32, f64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SortedMap<i64, i64>: Send, Sync, Clone);

impl<K, V> SortedMap<K, V> {
    /// Creates an empty map without allocating.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of entries the map can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    /// The keys in ascending order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The values, parallel to [`keys`](Self::keys).
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Replaces every value with `f(key, value)`. Keys stay untouched.
    pub(crate) fn update_values<F: FnMut(K, V) -> V>(&mut self, mut f: F)
    where
        K: Copy,
        V: Copy,
    {
        for (key, value) in self.keys.iter().zip(self.values.iter_mut()) {
            *value = f(*key, *value);
        }
    }

    /// Removes every entry, keeping allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Shrinks the backing arrays to exactly the number of entries.
    pub fn trim_to_size(&mut self) {
        if self.keys.capacity() != self.keys.len() || self.values.capacity() != self.values.len()
        {
            #[cfg(feature = "logging")]
            log::debug!(
                "trimming sorted map from {} to {} slots",
                self.capacity(),
                self.keys.len()
            );
            self.keys.shrink_to_fit();
            self.values.shrink_to_fit();
        }
    }

    /// Splits the map into its key and value arrays.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }

    /// Returns an ascending iterator over the entries.
    #[inline]
    pub fn iter(&self) -> SortedMapIterator<'_, K, V> {
        SortedMapIterator {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> SortedMap<K, V> {
    /// Builds a map from arrays the caller guarantees to be sorted.
    ///
    /// The keys must be strictly increasing (sorted and unique). The input is
    /// validated, never repaired: use [`from_unsorted`](Self::from_unsorted)
    /// when the order is unknown.
    ///
    /// # Errors
    ///
    /// - [`PrimitiveError::LengthMismatch`] if the arrays differ in length.
    /// - [`PrimitiveError::UnsortedKeys`] if a key is not greater than its
    ///   predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primvec::error::PrimitiveError;
    /// use primvec::map::SortedMap;
    ///
    /// let map = SortedMap::from_sorted(vec![1, 4, 9], vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(map.get(4), 2.0);
    ///
    /// let error = SortedMap::from_sorted(vec![1, 4, 4], vec![1.0, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(error, PrimitiveError::UnsortedKeys { position: 2 });
    /// ```
    pub fn from_sorted(keys: Vec<K>, values: Vec<V>) -> Result<Self, PrimitiveError> {
        check_lengths(&keys, &values)?;
        if let Some(position) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(PrimitiveError::UnsortedKeys {
                position: position + 1,
            });
        }
        Ok(Self { keys, values })
    }

    /// Builds a map from arrays in arbitrary key order.
    ///
    /// Sorts the pair once with the dual-array quicksort. Duplicate keys are
    /// rejected rather than merged.
    ///
    /// # Errors
    ///
    /// - [`PrimitiveError::LengthMismatch`] if the arrays differ in length.
    /// - [`PrimitiveError::DuplicateKey`] if a key occurs more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primvec::map::SortedMap;
    ///
    /// let map = SortedMap::from_unsorted(vec![9, 1, 4], vec![3, 1, 2]).unwrap();
    /// assert_eq!(map.keys(), &[1, 4, 9]);
    /// assert_eq!(map.values(), &[1, 2, 3]);
    /// ```
    pub fn from_unsorted(mut keys: Vec<K>, mut values: Vec<V>) -> Result<Self, PrimitiveError> {
        check_lengths(&keys, &values)?;
        sort_keys_asc(&mut keys, &mut values);
        if let Some(position) = keys.windows(2).position(|pair| pair[0] == pair[1]) {
            return Err(PrimitiveError::DuplicateKey {
                position: position + 1,
            });
        }
        Ok(Self { keys, values })
    }

    /// Wraps arrays produced by a merge of two sorted maps.
    #[inline]
    pub(crate) fn from_sorted_unchecked(keys: Vec<K>, values: Vec<V>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        debug_assert!(
            keys.windows(2).all(|pair| pair[0] < pair[1]),
            "merged keys must be strictly increasing"
        );
        Self { keys, values }
    }

    /// Position of `key`, or the insertion point that keeps `keys` sorted.
    #[inline]
    fn find(&self, key: K) -> Result<usize, usize> {
        self.keys.binary_search(&key)
    }

    /// Returns the value for `key`, or [`PrimitiveValue::MISSING`] if absent.
    #[inline]
    pub fn get(&self, key: K) -> V {
        self.get_with_default(key, V::MISSING)
    }

    /// Returns the value for `key`, or `default` if absent.
    #[inline]
    pub fn get_with_default(&self, key: K, default: V) -> V {
        self.find(key)
            .map_or(default, |position| self.values[position])
    }

    /// Returns `true` if `key` has an entry.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.find(key).is_ok()
    }

    /// Associates `value` with `key`.
    ///
    /// An existing key is overwritten in place; a new key is shift-inserted
    /// at its sorted position.
    pub fn put(&mut self, key: K, value: V) {
        match self.find(key) {
            Ok(position) => self.values[position] = value,
            Err(position) => self.insert_at(position, key, value),
        }
    }

    /// Adds `adjust` to the value at `key`, or inserts `put` if absent.
    ///
    /// Returns the value now stored. One binary search in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primvec::map::SortedMap;
    ///
    /// let mut counts = SortedMap::new();
    /// assert_eq!(counts.adjust_or_put(7, 1, 1), 1);
    /// assert_eq!(counts.adjust_or_put(7, 1, 1), 2);
    /// ```
    pub fn adjust_or_put(&mut self, key: K, adjust: V, put: V) -> V {
        match self.find(key) {
            Ok(position) => {
                let adjusted = self.values[position].wrapping_add(adjust);
                self.values[position] = adjusted;
                adjusted
            }
            Err(position) => {
                self.insert_at(position, key, put);
                put
            }
        }
    }

    /// Removes `key`, shifting the tail left. Absent keys are a no-op.
    pub fn remove(&mut self, key: K) {
        if let Ok(position) = self.find(key) {
            self.keys.remove(position);
            self.values.remove(position);
        }
    }

    fn insert_at(&mut self, position: usize, key: K, value: V) {
        self.ensure_room();
        self.keys.insert(position, key);
        self.values.insert(position, value);
    }

    /// Doubles the backing arrays when the next insert would not fit.
    fn ensure_room(&mut self) {
        let length = self.keys.len();
        if length < self.keys.capacity() && length < self.values.capacity() {
            return;
        }
        let additional = length.max(INITIAL_CAPACITY);
        #[cfg(feature = "logging")]
        log::debug!(
            "growing sorted map from {} to {} slots",
            self.capacity(),
            length + additional
        );
        self.keys.reserve_exact(additional);
        self.values.reserve_exact(additional);
    }
}

fn check_lengths<K, V>(keys: &[K], values: &[V]) -> Result<(), PrimitiveError> {
    if keys.len() == values.len() {
        Ok(())
    } else {
        Err(PrimitiveError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        })
    }
}

impl<K, V> Default for SortedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.keys.iter().zip(self.values.iter()))
            .finish()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveMap<K, V> for SortedMap<K, V> {
    type Iter<'a> = SortedMapIterator<'a, K, V>;

    #[inline]
    fn get_with_default(&self, key: K, default: V) -> V {
        Self::get_with_default(self, key, default)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        Self::put(self, key, value);
    }

    #[inline]
    fn adjust_or_put(&mut self, key: K, adjust: V, put: V) -> V {
        Self::adjust_or_put(self, key, adjust, put)
    }

    #[inline]
    fn remove(&mut self, key: K) {
        Self::remove(self, key);
    }

    #[inline]
    fn contains(&self, key: K) -> bool {
        Self::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn to_key_vec(&self) -> Vec<K> {
        self.keys.clone()
    }

    fn to_value_vec(&self) -> Vec<V> {
        self.values.clone()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> FromIterator<(K, V)> for SortedMap<K, V> {
    /// Collects entries through [`put`](SortedMap::put); later duplicates win.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Extend<(K, V)> for SortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K: Copy, V: Copy> IntoIterator for &'a SortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = SortedMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Ascending iterator over the entries of a [`SortedMap`].
///
/// Cloning the iterator restarts nothing: the clone continues from the same
/// position. Call [`SortedMap::iter`] again to restart.
#[derive(Clone)]
pub struct SortedMapIterator<'a, K, V> {
    keys: std::slice::Iter<'a, K>,
    values: std::slice::Iter<'a, V>,
}

impl<K: Copy, V: Copy> Iterator for SortedMapIterator<'_, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next()?, *self.values.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Copy, V: Copy> DoubleEndedIterator for SortedMapIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next_back()?, *self.values.next_back()?))
    }
}

impl<K: Copy, V: Copy> ExactSizeIterator for SortedMapIterator<'_, K, V> {}

impl<K: Copy, V: Copy> FusedIterator for SortedMapIterator<'_, K, V> {}
