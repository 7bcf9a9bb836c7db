//! Open-addressing hash map over primitive keys.
//!
//! [`PrimitiveHashMap`] keeps its entries in a flat power-of-two slot table.
//! Each key's home slot is its mixing hash masked to the table size; on
//! collision the probe walks forward one slot at a time (linear probing).
//!
//! # Deletion
//!
//! Removal uses back-shift deletion instead of tombstones: after emptying a
//! slot, later entries of the same probe chain that may legally sit in the
//! hole are moved back into it, until an empty slot ends the chain. Probe
//! sequences therefore never accumulate dead slots, however many removals
//! happen.
//!
//! # Growth
//!
//! After an insert pushes the number of entries past
//! `capacity * load_factor`, the table doubles (more than once for very small
//! load factors) and every entry is reinserted through
//! [`PrimitiveHashMap::put`]. This is the only place keys are
//! rehashed. The table never shrinks.
//!
//! # Examples
//!
//! ```rust
//! use primvec::map::PrimitiveHashMap;
//!
//! let mut map = PrimitiveHashMap::with_capacity(2).unwrap();
//! for key in 0..100_i64 {
//!     map.put(key, key as f64 * 0.5);
//! }
//! map.remove(10);
//!
//! assert_eq!(map.len(), 99);
//! assert_eq!(map.get(11), 5.5);
//! assert!(map.get(10).is_nan());
//! assert!(map.capacity().is_power_of_two());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::PrimitiveError;
use crate::primitive::{PrimitiveKey, PrimitiveValue};

use super::PrimitiveMap;

/// Slots allocated by [`PrimitiveHashMap::new`].
const DEFAULT_CAPACITY: usize = 16;

/// Load factor used by [`PrimitiveHashMap::new`] and
/// [`PrimitiveHashMap::with_capacity`].
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor. Below it a growing table would need more
/// doublings than `usize` allows before holding a single entry.
pub const MIN_LOAD_FACTOR: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
}

/// Open-addressing hash map with linear probing and back-shift deletion.
///
/// # Invariants
///
/// - The capacity is a power of two and at least one slot is always empty.
/// - No slot lies empty between an entry's home slot and the slot holding it.
/// - No key occupies two slots.
///
/// # Time Complexity
///
/// | Operation          | Complexity      |
/// |--------------------|-----------------|
/// | `get` / `contains` | O(1) expected   |
/// | `put`              | O(1) amortized  |
/// | `remove`           | O(1) expected   |
/// | `iter`             | O(capacity)     |
///
/// Cloning copies the whole slot table.
#[derive(Clone)]
pub struct PrimitiveHashMap<K, V> {
    slots: Box<[Slot<K, V>]>,
    length: usize,
    mask: usize,
    load_factor: f64,
    /// Largest entry count tolerated before the table doubles.
    grow_threshold: usize,
}

static_assertions::assert_impl_all!(PrimitiveHashMap<i32, f64>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PrimitiveHashMap<i64, f32>: Send, Sync, Clone);

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn grow_threshold(capacity: usize, load_factor: f64) -> usize {
    (capacity as f64 * load_factor) as usize
}

impl<K, V> PrimitiveHashMap<K, V> {
    /// Number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of slots in the table.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The configured load-factor threshold.
    #[inline]
    #[must_use]
    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns an iterator over the entries in slot order.
    #[inline]
    pub fn iter(&self) -> PrimitiveHashMapIterator<'_, K, V> {
        PrimitiveHashMapIterator {
            slots: self.slots.iter(),
            remaining: self.length,
        }
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveHashMap<K, V> {
    /// Creates an empty map with 16 slots and a 0.75 load factor.
    #[must_use]
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with at least `capacity` slots.
    ///
    /// The slot count is rounded up to a power of two.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::InvalidCapacity`] if `capacity` is zero or
    /// cannot be rounded to a power of two.
    pub fn with_capacity(capacity: usize) -> Result<Self, PrimitiveError> {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with at least `capacity` slots that doubles once
    /// more than `capacity * load_factor` entries are stored.
    ///
    /// # Errors
    ///
    /// - [`PrimitiveError::InvalidCapacity`] if `capacity` is zero or cannot
    ///   be rounded to a power of two.
    /// - [`PrimitiveError::InvalidLoadFactor`] unless
    ///   [`MIN_LOAD_FACTOR`] `<= load_factor < 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primvec::error::PrimitiveError;
    /// use primvec::map::PrimitiveHashMap;
    ///
    /// let map = PrimitiveHashMap::<i32, i32>::with_capacity_and_load_factor(10, 0.5).unwrap();
    /// assert_eq!(map.capacity(), 16);
    ///
    /// let error = PrimitiveHashMap::<i32, i32>::with_capacity_and_load_factor(10, 1.0).unwrap_err();
    /// assert_eq!(error, PrimitiveError::InvalidLoadFactor { requested: 1.0 });
    /// ```
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, PrimitiveError> {
        if !(MIN_LOAD_FACTOR..1.0).contains(&load_factor) {
            return Err(PrimitiveError::InvalidLoadFactor {
                requested: load_factor,
            });
        }
        let slots = (capacity > 0)
            .then(|| capacity.checked_next_power_of_two())
            .flatten()
            .ok_or(PrimitiveError::InvalidCapacity {
                requested: capacity,
            })?;
        Ok(Self::allocate(slots, load_factor))
    }

    fn allocate(capacity: usize, load_factor: f64) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            length: 0,
            mask: capacity - 1,
            load_factor,
            grow_threshold: grow_threshold(capacity, load_factor),
        }
    }

    #[inline]
    fn home(&self, key: K) -> usize {
        key.hash_key() as usize & self.mask
    }

    /// Walks the probe chain of `key`.
    ///
    /// Returns `Ok(slot)` holding the key, or `Err(slot)` for the empty slot
    /// that ends the chain.
    fn probe(&self, key: K) -> Result<usize, usize> {
        let mut index = self.home(key);
        loop {
            match self.slots[index] {
                Slot::Empty => return Err(index),
                Slot::Occupied { key: existing, .. } if existing == key => return Ok(index),
                Slot::Occupied { .. } => index = (index + 1) & self.mask,
            }
        }
    }

    /// Returns the value for `key`, or [`PrimitiveValue::MISSING`] if absent.
    #[inline]
    pub fn get(&self, key: K) -> V {
        self.get_with_default(key, V::MISSING)
    }

    /// Returns the value for `key`, or `default` if absent.
    pub fn get_with_default(&self, key: K, default: V) -> V {
        match self.probe(key) {
            Ok(index) => match self.slots[index] {
                Slot::Occupied { value, .. } => value,
                Slot::Empty => default,
            },
            Err(_) => default,
        }
    }

    /// Returns `true` if `key` has an entry.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.probe(key).is_ok()
    }

    /// Associates `value` with `key`, replacing any previous value.
    pub fn put(&mut self, key: K, value: V) {
        match self.probe(key) {
            Ok(index) => self.slots[index] = Slot::Occupied { key, value },
            Err(index) => self.occupy(index, key, value),
        }
    }

    /// Adds `adjust` to the value at `key`, or inserts `put` if absent.
    ///
    /// Returns the value now stored. One probe in either case.
    pub fn adjust_or_put(&mut self, key: K, adjust: V, put: V) -> V {
        match self.probe(key) {
            Ok(index) => {
                let Slot::Occupied { value, .. } = self.slots[index] else {
                    unreachable!("probe returned an empty slot as a match")
                };
                let adjusted = value.wrapping_add(adjust);
                self.slots[index] = Slot::Occupied {
                    key,
                    value: adjusted,
                };
                adjusted
            }
            Err(index) => {
                self.occupy(index, key, put);
                put
            }
        }
    }

    fn occupy(&mut self, index: usize, key: K, value: V) {
        self.slots[index] = Slot::Occupied { key, value };
        self.length += 1;
        if self.length > self.grow_threshold {
            self.grow();
        }
    }

    /// Removes `key` with back-shift deletion. Absent keys are a no-op.
    pub fn remove(&mut self, key: K) {
        let Ok(mut hole) = self.probe(key) else {
            return;
        };
        self.length -= 1;

        let mut next = (hole + 1) & self.mask;
        while let Slot::Occupied { key: candidate, .. } = self.slots[next] {
            let home = self.home(candidate);
            // The candidate may move into the hole only if the hole lies on
            // its probe chain, i.e. cyclically within [home, next).
            let reachable = if home <= next {
                home <= hole && hole < next
            } else {
                home <= hole || hole < next
            };
            if reachable {
                self.slots[hole] = self.slots[next];
                hole = next;
            }
            next = (next + 1) & self.mask;
        }
        self.slots[hole] = Slot::Empty;
    }

    /// Replaces every value with `f(key, value)` without touching the layout.
    pub(crate) fn update_values<F: FnMut(K, V) -> V>(&mut self, mut f: F) {
        for slot in self.slots.iter_mut() {
            if let Slot::Occupied { key, value } = slot {
                *value = f(*key, *value);
            }
        }
    }

    /// Removes every entry, keeping the table size.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.length = 0;
    }

    /// Doubles the table until the entries fit under the load factor, then
    /// reinserts every entry.
    fn grow(&mut self) {
        let mut capacity = self.slots.len() * 2;
        while grow_threshold(capacity, self.load_factor) < self.length {
            capacity *= 2;
        }
        #[cfg(feature = "logging")]
        log::debug!(
            "rehashing primitive hash map: {} entries, {} -> {} slots",
            self.length,
            self.slots.len(),
            capacity
        );

        let previous = std::mem::replace(
            &mut self.slots,
            vec![Slot::Empty; capacity].into_boxed_slice(),
        );
        self.mask = capacity - 1;
        self.grow_threshold = grow_threshold(capacity, self.load_factor);
        let expected = self.length;
        self.length = 0;

        for slot in previous.iter() {
            if let Slot::Occupied { key, value } = *slot {
                self.put(key, value);
            }
        }
        debug_assert_eq!(self.length, expected);
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Default for PrimitiveHashMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PartialEq for PrimitiveHashMap<K, V> {
    /// Two maps are equal when they hold the same entries, whatever their
    /// capacity or slot layout.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.iter().all(|(key, value)| match other.probe(key) {
                Ok(index) => other.slots[index] == Slot::Occupied { key, value },
                Err(_) => false,
            })
    }
}

impl<K: fmt::Debug + Copy, V: fmt::Debug + Copy> fmt::Debug for PrimitiveHashMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveMap<K, V> for PrimitiveHashMap<K, V> {
    type Iter<'a> = PrimitiveHashMapIterator<'a, K, V>;

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
}

impl<K: PrimitiveKey, V: PrimitiveValue> FromIterator<(K, V)> for PrimitiveHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Extend<(K, V)> for PrimitiveHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K: Copy, V: Copy> IntoIterator for &'a PrimitiveHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = PrimitiveHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over the entries of a [`PrimitiveHashMap`] in slot order.
#[derive(Clone)]
pub struct PrimitiveHashMapIterator<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<K: Copy, V: Copy> Iterator for PrimitiveHashMapIterator<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = *slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Copy, V: Copy> ExactSizeIterator for PrimitiveHashMapIterator<'_, K, V> {}

impl<K: Copy, V: Copy> FusedIterator for PrimitiveHashMapIterator<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Checks that every entry is reachable from its home slot without
    /// crossing an empty slot.
    fn assert_probe_chains_intact<K: PrimitiveKey, V: PrimitiveValue>(
        map: &PrimitiveHashMap<K, V>,
    ) {
        let mut occupied = 0;
        for (position, slot) in map.slots.iter().enumerate() {
            if let Slot::Occupied { key, .. } = *slot {
                occupied += 1;
                let mut index = map.home(key);
                while index != position {
                    assert!(
                        matches!(map.slots[index], Slot::Occupied { .. }),
                        "empty slot {index} breaks the chain of {key:?}"
                    );
                    index = (index + 1) & map.mask;
                }
            }
        }
        assert_eq!(occupied, map.len());
    }

    #[rstest]
    fn test_powers_of_two_keys() {
        let mut map: PrimitiveHashMap<i32, i64> = PrimitiveHashMap::new();
        for shift in 0..32 {
            map.put(2 << shift, i64::from(shift));
        }
        assert_eq!(map.len(), 32);
        for shift in 0..32 {
            assert_eq!(map.get(2 << shift), i64::from(shift));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(usize::MAX)]
    fn test_invalid_capacity_is_rejected(#[case] capacity: usize) {
        let result = PrimitiveHashMap::<i32, f64>::with_capacity(capacity);
        assert_eq!(
            result.unwrap_err(),
            PrimitiveError::InvalidCapacity {
                requested: capacity
            }
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(1.0)]
    #[case(f64::NAN)]
    #[case(1e-300)]
    #[case(0.009)]
    fn test_invalid_load_factor_is_rejected(#[case] load_factor: f64) {
        let result = PrimitiveHashMap::<i64, i64>::with_capacity_and_load_factor(8, load_factor);
        assert!(matches!(
            result,
            Err(PrimitiveError::InvalidLoadFactor { .. })
        ));
    }

    #[rstest]
    fn test_capacity_rounds_up_to_power_of_two() {
        let map = PrimitiveHashMap::<i32, i32>::with_capacity(5).unwrap();
        assert_eq!(map.capacity(), 8);
    }

    #[rstest]
    fn test_growth_happens_past_threshold() {
        let mut map = PrimitiveHashMap::<i32, i32>::with_capacity(4).unwrap();
        for key in 0..3 {
            map.put(key, key);
        }
        assert_eq!(map.capacity(), 4);
        map.put(3, 3);
        assert_eq!(map.capacity(), 8);
        assert_probe_chains_intact(&map);
    }

    #[rstest]
    fn test_back_shift_deletion_keeps_chains_intact() {
        let mut map = PrimitiveHashMap::<i64, f64>::with_capacity(2).unwrap();
        for key in 0..500_i64 {
            map.put(key, key as f64);
        }
        for key in (0..500_i64).step_by(3) {
            map.remove(key);
            assert_probe_chains_intact(&map);
        }
        for key in 0..500_i64 {
            if key % 3 == 0 {
                assert!(!map.contains(key));
            } else {
                assert_eq!(map.get(key), key as f64);
            }
        }
    }

    #[rstest]
    fn test_remove_absent_key_is_noop() {
        let mut map: PrimitiveHashMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        map.remove(3);
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn test_adjust_or_put() {
        let mut map: PrimitiveHashMap<i32, i64> = PrimitiveHashMap::new();
        assert_eq!(map.adjust_or_put(9, 2, 5), 5);
        assert_eq!(map.adjust_or_put(9, 2, 5), 7);
        assert_eq!(map.get(9), 7);
    }

    #[rstest]
    fn test_iteration_visits_each_entry_once() {
        let map: PrimitiveHashMap<i32, i32> = (0..50).map(|key| (key, key * key)).collect();
        let mut seen: Vec<(i32, i32)> = map.iter().collect();
        seen.sort_unstable();
        let expected: Vec<(i32, i32)> = (0..50).map(|key| (key, key * key)).collect();
        assert_eq!(seen, expected);
        assert_eq!(map.iter().len(), 50);
    }

    #[rstest]
    fn test_equality_ignores_layout() {
        let small: PrimitiveHashMap<i32, i32> = {
            let mut map = PrimitiveHashMap::with_capacity(1).unwrap();
            map.extend((0..20).map(|key| (key, key)));
            map
        };
        let large: PrimitiveHashMap<i32, i32> = {
            let mut map = PrimitiveHashMap::with_capacity(1024).unwrap();
            map.extend((0..20).rev().map(|key| (key, key)));
            map
        };
        assert_eq!(small, large);
    }

    #[rstest]
    fn test_clear_keeps_capacity() {
        let mut map: PrimitiveHashMap<i64, i64> = (0..100).map(|key| (key, key)).collect();
        let capacity = map.capacity();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert!(!map.contains(5));
    }
}
