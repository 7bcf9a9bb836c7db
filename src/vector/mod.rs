//! Sparse and dense primitive vectors.
//!
//! A sparse vector is conceptually infinite: every key without an explicit
//! entry holds zero. Explicit zeros are allowed and survive arithmetic until
//! they are stripped with `without_zero_values`.
//!
//! The module is built from two traits:
//!
//! - [`SparseMapLike`]: the capability of exposing explicit entries. A
//!   backend that keeps its entries sorted overrides
//!   [`sorted_view`](SparseMapLike::sorted_view), which lets the generic
//!   operations pick a linear merge instead of per-key lookups.
//! - [`PrimitiveVector`]: the vector contract. Element access is required;
//!   dot products, in-place arithmetic and aggregates are provided as folds
//!   over [`entries`](SparseMapLike::entries).
//!
//! Three vectors implement the contract:
//!
//! | Type             | Storage                 | Merge fast paths |
//! |------------------|-------------------------|------------------|
//! | [`SortedVector`] | [`SortedMap`]           | yes              |
//! | [`HashVector`]   | [`PrimitiveHashMap`]    | no               |
//! | [`DenseVector`]  | `Vec<V>` indexed by key | no               |
//!
//! A dense vector has no key array to expose as a sorted view. Its lookups
//! are O(1), so `dot` against it walks the sparser side and indexes the
//! dense one; only [`dot_dense`](PrimitiveVector::dot_dense) is specialized
//! to zip the two slices.
//!
//! [`SortedMap`]: crate::map::SortedMap
//! [`PrimitiveHashMap`]: crate::map::PrimitiveHashMap
//!
//! # Examples
//!
//! ```rust
//! use primvec::vector::{HashVector, PrimitiveVector, SortedVector};
//!
//! let sorted: SortedVector<i32, f64> = [(1, 2.0), (5, 3.0)].into_iter().collect();
//! let hashed: HashVector<i32, f64> = [(5, 4.0), (9, 1.0)].into_iter().collect();
//!
//! assert_eq!(sorted.dot(&hashed), 12.0);
//! assert_eq!(sorted.dot_dense(&[0.0, 10.0]), 20.0);
//! assert_eq!(hashed.argmax(), Some(5));
//! ```

use crate::primitive::{PrimitiveKey, PrimitiveValue};

mod dense;
mod hash;
pub mod merge;
mod sorted;

pub use dense::DenseVector;
pub use hash::HashVector;
pub use sorted::SortedVector;

// =============================================================================
// Capability
// =============================================================================

/// Read access to the explicit entries of a vector.
pub trait SparseMapLike<K: PrimitiveKey, V: PrimitiveValue> {
    /// Iterates over every explicit entry, in the backend's order.
    fn entries(&self) -> impl Iterator<Item = (K, V)> + '_;

    /// Number of explicit entries, zeros included.
    fn num_explicit(&self) -> usize;

    /// Returns `true` if `key` has an explicit entry.
    fn contains(&self, key: K) -> bool;

    /// The entries as strictly increasing keys with parallel values, when
    /// the backend stores them that way.
    #[inline]
    fn sorted_view(&self) -> Option<(&[K], &[V])> {
        None
    }
}

// =============================================================================
// Vector Contract
// =============================================================================

/// Arithmetic over a vector with implicit zeros.
///
/// # Laws
///
/// For vectors `a`, `b` over the same key and value types:
///
/// - `a.dot(&b) == b.dot(&a)` (up to float rounding)
/// - after `a.add(&b)`, `a.get(k) == old_a.get(k) + b.get(k)` for every `k`
/// - `a.inf_norm() >= 0` and equals `0` for a vector without entries
pub trait PrimitiveVector<K: PrimitiveKey, V: PrimitiveValue>: SparseMapLike<K, V> {
    /// Returns the value at `key`, or zero without an explicit entry.
    fn get(&self, key: K) -> V;

    /// Stores `value` at `key`.
    fn set(&mut self, key: K, value: V);

    /// Adds `delta` to the value at `key`.
    fn add_at(&mut self, key: K, delta: V);

    /// Replaces every explicit value with `f(key, value)`.
    fn apply<F: FnMut(K, V) -> V>(&mut self, f: F);

    /// Multiplies every explicit value by `factor`.
    #[inline]
    fn scale(&mut self, factor: V) {
        self.apply(|_, value| value.wrapping_mul(factor));
    }

    /// Sets every explicit value to zero, keeping the entries.
    #[inline]
    fn zero(&mut self) {
        self.apply(|_, _| V::ZERO);
    }

    /// Dot product with another vector.
    ///
    /// Merges the two entry lists when both sides expose a sorted view;
    /// otherwise walks the side with fewer explicit entries and looks each
    /// key up on the other.
    fn dot<O: PrimitiveVector<K, V> + ?Sized>(&self, other: &O) -> V {
        if let (Some((left_keys, left_values)), Some((right_keys, right_values))) =
            (self.sorted_view(), other.sorted_view())
        {
            return merge::dot(left_keys, left_values, right_keys, right_values);
        }
        if self.num_explicit() <= other.num_explicit() {
            self.entries()
                .fold(V::ZERO, |sum, (key, value)| {
                    sum.wrapping_add(value.wrapping_mul(other.get(key)))
                })
        } else {
            other
                .entries()
                .fold(V::ZERO, |sum, (key, value)| {
                    sum.wrapping_add(self.get(key).wrapping_mul(value))
                })
        }
    }

    /// Dot product with a dense slice indexed by key.
    ///
    /// Entries whose key is negative, past the end of `dense`, or beyond the
    /// addressable range contribute nothing.
    fn dot_dense(&self, dense: &[V]) -> V {
        if let Some((keys, values)) = self.sorted_view() {
            return merge::dot_dense(keys, values, dense);
        }
        self.entries()
            .filter_map(|(key, value)| {
                key.to_index()
                    .and_then(|index| dense.get(index))
                    .map(|&element| value.wrapping_mul(element))
            })
            .fold(V::ZERO, V::wrapping_add)
    }

    /// Adds `other` into `self`.
    fn add<O: SparseMapLike<K, V> + ?Sized>(&mut self, other: &O) {
        for (key, value) in other.entries() {
            self.add_at(key, value);
        }
    }

    /// Subtracts `other` from `self`.
    fn subtract<O: SparseMapLike<K, V> + ?Sized>(&mut self, other: &O) {
        for (key, value) in other.entries() {
            let current = self.get(key);
            self.set(key, current.wrapping_sub(value));
        }
    }

    /// Multiplies `self` elementwise by `other` in place.
    ///
    /// Entries of `self` without a counterpart in `other` become explicit
    /// zeros.
    fn product<O: PrimitiveVector<K, V> + ?Sized>(&mut self, other: &O) {
        self.apply(|key, value| value.wrapping_mul(other.get(key)));
    }

    /// Sum of the explicit values.
    fn sum(&self) -> V {
        self.entries()
            .fold(V::ZERO, |sum, (_, value)| sum.wrapping_add(value))
    }

    /// Product of the explicit values; one for a vector without entries.
    fn prod(&self) -> V {
        self.entries()
            .fold(V::ONE, |product, (_, value)| product.wrapping_mul(value))
    }

    /// Largest explicit value, or [`PrimitiveValue::LOWEST`] without entries.
    fn max(&self) -> V {
        self.entries()
            .fold(V::LOWEST, |max, (_, value)| if value > max { value } else { max })
    }

    /// Key of the first maximal explicit value in entry order.
    fn argmax(&self) -> Option<K> {
        self.entries()
            .fold(None, |best: Option<(K, V)>, (key, value)| match best {
                Some((_, max)) if value <= max => best,
                _ => Some((key, value)),
            })
            .map(|(key, _)| key)
    }

    /// Largest absolute explicit value; zero without entries.
    fn inf_norm(&self) -> V {
        self.entries().fold(V::ZERO, |norm, (_, value)| {
            let magnitude = value.abs();
            if magnitude > norm { magnitude } else { norm }
        })
    }

    /// Sum of the squared explicit values.
    fn l2_norm_squared(&self) -> V {
        self.entries()
            .fold(V::ZERO, |sum, (_, value)| sum.wrapping_add(value.wrapping_mul(value)))
    }

    /// Returns `true` if both vectors agree within `delta` on every key.
    ///
    /// Both sides are compared with values within `delta` of zero stripped:
    /// the stripped entry counts must match and every remaining value must
    /// lie within `delta` of the stripped counterpart.
    fn approx_eq<O: PrimitiveVector<K, V> + ?Sized>(&self, other: &O, delta: V) -> bool {
        let explicit = |value: &V| !value.is_zero(delta);
        let left_count = self.entries().filter(|(_, value)| explicit(value)).count();
        let right_count = other.entries().filter(|(_, value)| explicit(value)).count();
        if left_count != right_count {
            return false;
        }
        self.entries()
            .filter(|(_, value)| explicit(value))
            .all(|(key, value)| {
                let counterpart = other.get(key);
                let counterpart = if explicit(&counterpart) { counterpart } else { V::ZERO };
                value.approx_eq(counterpart, delta)
            })
    }
}
