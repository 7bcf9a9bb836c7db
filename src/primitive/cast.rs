//! Narrowing casts that refuse to truncate.

use crate::error::NarrowingCastError;

fn overflow(
    source_type: &'static str,
    target_type: &'static str,
    value: impl std::fmt::Display,
) -> NarrowingCastError {
    NarrowingCastError {
        source_type,
        target_type,
        value: value.to_string(),
    }
}

/// Narrows an `i32` to an `i8`.
///
/// # Errors
///
/// Returns [`NarrowingCastError`] if `value` lies outside `i8`.
pub fn safe_i32_to_i8(value: i32) -> Result<i8, NarrowingCastError> {
    i8::try_from(value).map_err(|_| overflow("i32", "i8", value))
}

/// Narrows an `i32` to an `i16`.
///
/// # Errors
///
/// Returns [`NarrowingCastError`] if `value` lies outside `i16`.
pub fn safe_i32_to_i16(value: i32) -> Result<i16, NarrowingCastError> {
    i16::try_from(value).map_err(|_| overflow("i32", "i16", value))
}

/// Narrows an `i64` to an `i32`.
///
/// # Errors
///
/// Returns [`NarrowingCastError`] if `value` lies outside `i32`.
///
/// # Examples
///
/// ```rust
/// use primvec::primitive::safe_i64_to_i32;
///
/// assert_eq!(safe_i64_to_i32(-7), Ok(-7));
/// assert!(safe_i64_to_i32(1 << 31).is_err());
/// ```
pub fn safe_i64_to_i32(value: i64) -> Result<i32, NarrowingCastError> {
    i32::try_from(value).map_err(|_| overflow("i64", "i32", value))
}

/// Converts an `f64` to an `i32`, truncating toward zero.
///
/// # Errors
///
/// Returns [`NarrowingCastError`] if `value` is `NaN` or lies outside `i32`.
#[allow(clippy::cast_possible_truncation)]
pub fn safe_f64_to_i32(value: f64) -> Result<i32, NarrowingCastError> {
    if value.is_nan() || value > f64::from(i32::MAX) || value < f64::from(i32::MIN) {
        return Err(overflow("f64", "i32", value));
    }
    Ok(value as i32)
}

/// Converts an `f64` to an `f32`.
///
/// Infinities and `NaN` carry over; finite values whose magnitude exceeds
/// `f32::MAX` are rejected instead of becoming infinite.
///
/// # Errors
///
/// Returns [`NarrowingCastError`] if a finite `value` overflows `f32`.
#[allow(clippy::cast_possible_truncation)]
pub fn safe_f64_to_f32(value: f64) -> Result<f32, NarrowingCastError> {
    if value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(overflow("f64", "f32", value));
    }
    Ok(value as f32)
}
