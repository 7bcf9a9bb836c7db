//! Primitive-keyed maps.
//!
//! Two interchangeable strategies implement the same key→value contract,
//! [`PrimitiveMap`]:
//!
//! - [`SortedMap`]: parallel key/value arrays kept sorted by key. Binary
//!   search lookups, shift-based insertion and removal, ascending iteration.
//! - [`PrimitiveHashMap`]: open addressing with linear probing, back-shift
//!   deletion and doubling growth. Expected O(1) operations, unordered
//!   iteration.
//!
//! # Time Complexity
//!
//! | Operation       | `SortedMap` | `PrimitiveHashMap` |
//! |-----------------|-------------|--------------------|
//! | `get`           | O(log n)    | O(1) expected      |
//! | `put` (new key) | O(n)        | O(1) amortized     |
//! | `remove`        | O(n)        | O(1) expected      |
//! | `iter`          | O(n) sorted | O(capacity)        |
//!
//! # Examples
//!
//! ```rust
//! use primvec::map::{PrimitiveHashMap, PrimitiveMap, SortedMap};
//!
//! fn fill<M: PrimitiveMap<i32, f64>>(map: &mut M) {
//!     map.put(3, 0.3);
//!     map.put(1, 0.1);
//!     map.remove(3);
//! }
//!
//! let mut sorted = SortedMap::new();
//! let mut hashed = PrimitiveHashMap::new();
//! fill(&mut sorted);
//! fill(&mut hashed);
//!
//! assert_eq!(sorted.get(1), hashed.get(1));
//! assert!(sorted.get(3).is_nan());
//! assert!(hashed.get(3).is_nan());
//! ```

use crate::primitive::{PrimitiveKey, PrimitiveValue};

mod hash;
mod sorted;

pub use hash::PrimitiveHashMap;
pub use hash::PrimitiveHashMapIterator;
pub use hash::MIN_LOAD_FACTOR;
pub use sorted::SortedMap;
pub use sorted::SortedMapIterator;

/// The key→value contract shared by both map backends.
///
/// Reads of absent keys never fail: [`get`](Self::get) resolves to
/// [`PrimitiveValue::MISSING`] and [`get_with_default`](Self::get_with_default)
/// to the caller's default.
pub trait PrimitiveMap<K: PrimitiveKey, V: PrimitiveValue> {
    /// Iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (K, V)>
    where
        Self: 'a;

    /// Returns the value for `key`, or `default` if absent.
    fn get_with_default(&self, key: K, default: V) -> V;

    /// Associates `value` with `key`, replacing any previous value.
    fn put(&mut self, key: K, value: V);

    /// Adds `adjust` to the value at `key` if present, otherwise stores `put`.
    ///
    /// Performs a single lookup and returns the value now stored.
    fn adjust_or_put(&mut self, key: K, adjust: V, put: V) -> V;

    /// Removes `key` if present. Absent keys are a no-op.
    fn remove(&mut self, key: K);

    /// Returns `true` if `key` has an explicit entry.
    fn contains(&self, key: K) -> bool;

    /// Number of explicit entries.
    fn len(&self) -> usize;

    /// Removes every entry, keeping allocated capacity.
    fn clear(&mut self);

    /// Iterates over every entry.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the value for `key`, or [`PrimitiveValue::MISSING`] if absent.
    #[inline]
    fn get(&self, key: K) -> V {
        self.get_with_default(key, V::MISSING)
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies every key into a new vector, in iteration order.
    fn to_key_vec(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Copies every value into a new vector, in iteration order.
    fn to_value_vec(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value).collect()
    }
}
