//! Growable dense vector addressed by primitive keys.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{NarrowingCastError, PrimitiveError};
use crate::primitive::{PrimitiveKey, PrimitiveValue};

use super::{PrimitiveVector, SparseMapLike};

/// A dense vector whose positions are addressed by keys of type `K`.
///
/// Its length is one past the highest position ever written; positions in
/// between hold zero. Every position is an explicit entry.
///
/// # Examples
///
/// ```rust
/// use primvec::vector::{DenseVector, PrimitiveVector};
///
/// let mut weights = DenseVector::<i64, f64>::new();
/// weights.set(3, 0.5);
/// weights.add_at(1, 2.0);
///
/// assert_eq!(weights.to_vec(), vec![0.0, 2.0, 0.0, 0.5]);
/// assert_eq!(weights.dot_dense(&[1.0, 1.0, 1.0, 4.0]), 4.0);
/// assert!(weights.try_set(-1, 1.0).is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct DenseVector<K, V> {
    values: Vec<V>,
    key: PhantomData<K>,
}

static_assertions::assert_impl_all!(DenseVector<i32, f64>: Send, Sync, Clone);

impl<K: PrimitiveKey, V: PrimitiveValue> DenseVector<K, V> {
    /// Creates an empty vector.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates an empty vector with room for `capacity` positions.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Wraps `values`; position `i` becomes key `i`.
    #[inline]
    #[must_use]
    pub const fn from_vec(values: Vec<V>) -> Self {
        Self {
            values,
            key: PhantomData,
        }
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no position was ever written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Allocated positions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// The positions as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// Copies the positions into a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<V> {
        self.values.clone()
    }

    /// Stores `value` at `key`, growing the vector with zeros as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::NarrowingCast`] if `key` is negative or
    /// beyond the addressable range. Nothing is modified in that case.
    pub fn try_set(&mut self, key: K, value: V) -> Result<(), PrimitiveError> {
        let index = Self::index_of(key)?;
        if index >= self.values.len() {
            self.values.resize(index + 1, V::ZERO);
        }
        self.values[index] = value;
        Ok(())
    }

    /// Shrinks the allocation to the current length.
    pub fn trim_to_size(&mut self) {
        if self.values.capacity() > self.values.len() {
            #[cfg(feature = "logging")]
            log::debug!(
                "trimming dense vector from {} to {} positions",
                self.values.capacity(),
                self.values.len()
            );
            self.values.shrink_to_fit();
        }
    }

    /// Key of the first position within `delta` of `value`.
    pub fn lookup_index(&self, value: V, delta: V) -> Option<K> {
        self.values
            .iter()
            .position(|&element| element.approx_eq(value, delta))
            .and_then(K::from_index)
    }

    fn index_of(key: K) -> Result<usize, PrimitiveError> {
        key.to_index().ok_or_else(|| {
            PrimitiveError::from(NarrowingCastError {
                source_type: K::TYPE_NAME,
                target_type: "array index",
                value: key.to_string(),
            })
        })
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> Default for DenseVector<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> SparseMapLike<K, V> for DenseVector<K, V> {
    fn entries(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map_while(|(position, &value)| K::from_index(position).map(|key| (key, value)))
    }

    #[inline]
    fn num_explicit(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn contains(&self, key: K) -> bool {
        key.to_index().is_some_and(|index| index < self.values.len())
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> PrimitiveVector<K, V> for DenseVector<K, V> {
    #[inline]
    fn get(&self, key: K) -> V {
        key.to_index()
            .and_then(|index| self.values.get(index).copied())
            .unwrap_or(V::ZERO)
    }

    /// Stores `value` at `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is negative or beyond the addressable range; use
    /// [`DenseVector::try_set`] to handle that case.
    fn set(&mut self, key: K, value: V) {
        if let Err(error) = self.try_set(key, value) {
            panic!("{error}");
        }
    }

    /// Adds `delta` at `key`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`set`](Self::set).
    fn add_at(&mut self, key: K, delta: V) {
        let current = PrimitiveVector::get(self, key);
        self.set(key, current.wrapping_add(delta));
    }

    fn apply<F: FnMut(K, V) -> V>(&mut self, mut f: F) {
        for (position, value) in self.values.iter_mut().enumerate() {
            let Some(key) = K::from_index(position) else {
                break;
            };
            *value = f(key, *value);
        }
    }

    /// Dot product over the common prefix of both slices.
    fn dot_dense(&self, dense: &[V]) -> V {
        self.values
            .iter()
            .zip(dense)
            .fold(V::ZERO, |sum, (&left, &right)| sum.wrapping_add(left.wrapping_mul(right)))
    }
}

impl<K, V: fmt::Debug> fmt::Debug for DenseVector<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.values).finish()
    }
}

impl<K: PrimitiveKey, V: PrimitiveValue> From<Vec<V>> for DenseVector<K, V> {
    #[inline]
    fn from(values: Vec<V>) -> Self {
        Self::from_vec(values)
    }
}
