//! Epsilon-aware comparisons over primitive values.

use std::cmp::Ordering;

use super::PrimitiveValue;

/// Tolerance used when callers have no better delta at hand.
pub const DEFAULT_DELTA: f64 = 1e-13;

/// Returns `true` if `value` lies within `threshold` of zero.
#[inline]
pub fn is_zero<V: PrimitiveValue>(value: V, threshold: V) -> bool {
    value.is_zero(threshold)
}

/// Returns `true` if `a` and `b` differ by less than `delta`.
#[inline]
pub fn approx_eq<V: PrimitiveValue>(a: V, b: V, delta: V) -> bool {
    a.approx_eq(b, delta)
}

/// Compares two values up to `delta`.
///
/// Values within `delta` of each other are [`Ordering::Equal`]; otherwise the
/// total order of the type decides.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use primvec::primitive::compare;
///
/// assert_eq!(compare(1.0, 1.0 + 1e-15, 1e-13), Ordering::Equal);
/// assert_eq!(compare(1.0, 2.0, 1e-13), Ordering::Less);
/// ```
#[inline]
pub fn compare<V: PrimitiveValue>(a: V, b: V, delta: V) -> Ordering {
    if a.approx_eq(b, delta) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Returns `true` if `a <= b` up to `delta`.
#[inline]
pub fn lte<V: PrimitiveValue>(a: V, b: V, delta: V) -> bool {
    a <= b + delta
}

/// Returns `true` if `a >= b` up to `delta`.
#[inline]
pub fn gte<V: PrimitiveValue>(a: V, b: V, delta: V) -> bool {
    a + delta >= b
}
