//! Primitive scalar traits and helpers.
//!
//! Every container in this crate is generic over one key type and one value
//! type drawn from a closed set of primitives:
//!
//! - keys: [`i32`], [`i64`] (see [`PrimitiveKey`])
//! - values: [`i32`], [`i64`], [`f32`], [`f64`] (see [`PrimitiveValue`])
//!
//! The traits carry the type-specific constants (zero, the missing-entry
//! default, the lowest value) and the small pure functions the containers
//! consume: key hashing, epsilon-aware comparison and safe narrowing.
//!
//! # Examples
//!
//! ```rust
//! use primvec::primitive::{PrimitiveKey, PrimitiveValue};
//!
//! assert!(f64::MISSING.is_nan());
//! assert_eq!(i64::MISSING, 0);
//!
//! assert_eq!(7_i64.to_index(), Some(7));
//! assert_eq!((-1_i32).to_index(), None);
//! assert_eq!((1_i64 << 40).to_index(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Mul, Sub};

mod cast;
mod compare;
mod hash;

pub use cast::safe_f64_to_f32;
pub use cast::safe_f64_to_i32;
pub use cast::safe_i32_to_i8;
pub use cast::safe_i32_to_i16;
pub use cast::safe_i64_to_i32;
pub use compare::DEFAULT_DELTA;
pub use compare::approx_eq;
pub use compare::compare;
pub use compare::gte;
pub use compare::is_zero;
pub use compare::lte;
pub use hash::hash_of_i32;
pub use hash::hash_of_i64;

// =============================================================================
// Trait Definitions
// =============================================================================

/// Behavior shared by every key and value primitive.
pub trait Primitive:
    Copy + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human readable type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The additive identity.
    const ZERO: Self;

    /// Arithmetic negation. Integers wrap, so `MIN` negates to itself.
    #[must_use]
    fn negate(self) -> Self;

    /// A total order over the type (IEEE 754 `totalOrder` for floats).
    fn total_cmp(&self, other: &Self) -> Ordering;
}

/// A primitive usable as a container key.
pub trait PrimitiveKey: Primitive + Ord + Hash {
    /// Mixing hash that avalanches the low-order bits of the key.
    ///
    /// Sequential keys must not land in sequential slots of a power-of-two
    /// table.
    fn hash_key(self) -> u32;

    /// Converts the key into a native array position.
    ///
    /// Returns `None` when the key is negative or exceeds `i32::MAX`, the
    /// largest position an array may be addressed with.
    fn to_index(self) -> Option<usize>;

    /// Converts an array position back into a key.
    fn from_index(index: usize) -> Option<Self>;
}

/// A primitive usable as a container value.
pub trait PrimitiveValue:
    Primitive + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The multiplicative identity.
    const ONE: Self;

    /// The value a map returns for an absent key: `NaN` for floats, `0` for
    /// integers.
    const MISSING: Self;

    /// The smallest representable value: negative infinity for floats, `MIN`
    /// for integers.
    const LOWEST: Self;

    /// Absolute value. Integers wrap, so `MIN.abs()` is `MIN`.
    #[must_use]
    fn abs(self) -> Self;

    /// Addition that wraps around for integers instead of overflowing.
    #[must_use]
    fn wrapping_add(self, other: Self) -> Self;

    /// Subtraction that wraps around for integers instead of overflowing.
    #[must_use]
    fn wrapping_sub(self, other: Self) -> Self;

    /// Multiplication that wraps around for integers instead of overflowing.
    #[must_use]
    fn wrapping_mul(self, other: Self) -> Self;

    /// Returns `true` if `self` lies within `delta` of `other`.
    ///
    /// Floats compare `|self - other| < delta` (exactly equal values always
    /// match); integers compare `|self - other| <= |delta|`.
    fn approx_eq(self, other: Self, delta: Self) -> bool;

    /// Returns `true` if `self` lies in `[-|threshold|, |threshold|]`.
    #[inline]
    fn is_zero(self, threshold: Self) -> bool {
        let bound = threshold.abs();
        bound.negate() <= self && self <= bound
    }
}

// =============================================================================
// Integer Implementations
// =============================================================================

macro_rules! impl_integer_primitive {
    ($type:ty, $name:literal) => {
        impl Primitive for $type {
            const TYPE_NAME: &'static str = $name;
            const ZERO: Self = 0;

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }

        impl PrimitiveValue for $type {
            const ONE: Self = 1;
            const MISSING: Self = 0;
            const LOWEST: Self = <$type>::MIN;

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$type>::wrapping_add(self, other)
            }

            #[inline]
            fn wrapping_sub(self, other: Self) -> Self {
                <$type>::wrapping_sub(self, other)
            }

            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                <$type>::wrapping_mul(self, other)
            }

            #[inline]
            fn approx_eq(self, other: Self, delta: Self) -> bool {
                self.abs_diff(other) <= delta.unsigned_abs()
            }
        }
    };
}

macro_rules! impl_float_primitive {
    ($type:ty, $name:literal) => {
        impl Primitive for $type {
            const TYPE_NAME: &'static str = $name;
            const ZERO: Self = 0.0;

            #[inline]
            fn negate(self) -> Self {
                -self
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$type>::total_cmp(self, other)
            }
        }

        impl PrimitiveValue for $type {
            const ONE: Self = 1.0;
            const MISSING: Self = <$type>::NAN;
            const LOWEST: Self = <$type>::NEG_INFINITY;

            #[inline]
            fn abs(self) -> Self {
                <$type>::abs(self)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn wrapping_sub(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                self * other
            }

            #[inline]
            #[allow(clippy::float_cmp)]
            fn approx_eq(self, other: Self, delta: Self) -> bool {
                self == other || (self - other).abs() < delta
            }
        }
    };
}

impl_integer_primitive!(i32, "i32");
impl_integer_primitive!(i64, "i64");
impl_float_primitive!(f32, "f32");
impl_float_primitive!(f64, "f64");

impl PrimitiveKey for i32 {
    #[inline]
    fn hash_key(self) -> u32 {
        hash_of_i32(self)
    }

    #[inline]
    fn to_index(self) -> Option<usize> {
        usize::try_from(self).ok()
    }

    #[inline]
    fn from_index(index: usize) -> Option<Self> {
        Self::try_from(index).ok()
    }
}

impl PrimitiveKey for i64 {
    #[inline]
    fn hash_key(self) -> u32 {
        hash_of_i64(self)
    }

    #[inline]
    fn to_index(self) -> Option<usize> {
        safe_i64_to_i32(self)
            .ok()
            .and_then(|narrowed| usize::try_from(narrowed).ok())
    }

    #[inline]
    fn from_index(index: usize) -> Option<Self> {
        Self::try_from(index).ok()
    }
}
