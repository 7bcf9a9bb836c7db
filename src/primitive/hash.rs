//! Key hashing for open-addressing tables.
//!
//! The default mixers are the 32- and 64-bit finalizers of `MurmurHash3`.
//! Every input bit affects every output bit, which keeps runs of sequential
//! keys from forming clusters in a power-of-two table probed linearly.
//!
//! With the `fxhash` or `ahash` feature the key is fed through the
//! corresponding hasher instead and the 64-bit result is folded to 32 bits.
//! `ahash` takes precedence when both are enabled.

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
#[inline]
const fn mix32(value: u32) -> u32 {
    let mut hash = value;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(0x85eb_ca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2_ae35);
    hash ^ (hash >> 16)
}

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
#[inline]
const fn mix64(value: u64) -> u64 {
    let mut hash = value;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    hash ^ (hash >> 33)
}

#[cfg(any(feature = "fxhash", feature = "ahash"))]
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn fold64(hash: u64) -> u32 {
    (hash ^ (hash >> 32)) as u32
}

#[cfg(feature = "ahash")]
#[inline]
fn hasher() -> ahash::AHasher {
    ahash::AHasher::default()
}

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
#[inline]
fn hasher() -> rustc_hash::FxHasher {
    rustc_hash::FxHasher::default()
}

/// Computes the hash of an `i32` key.
///
/// # Examples
///
/// ```rust
/// use primvec::primitive::hash_of_i32;
///
/// assert_eq!(hash_of_i32(42), hash_of_i32(42));
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn hash_of_i32(key: i32) -> u32 {
    #[cfg(any(feature = "fxhash", feature = "ahash"))]
    {
        use std::hash::Hasher;
        let mut state = hasher();
        state.write_i32(key);
        fold64(state.finish())
    }
    #[cfg(not(any(feature = "fxhash", feature = "ahash")))]
    {
        mix32(key as u32)
    }
}

/// Computes the hash of an `i64` key.
///
/// # Examples
///
/// ```rust
/// use primvec::primitive::hash_of_i64;
///
/// assert_eq!(hash_of_i64(1 << 40), hash_of_i64(1 << 40));
/// assert_ne!(hash_of_i64(1 << 40), hash_of_i64(1 << 41));
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn hash_of_i64(key: i64) -> u32 {
    #[cfg(any(feature = "fxhash", feature = "ahash"))]
    {
        use std::hash::Hasher;
        let mut state = hasher();
        state.write_i64(key);
        fold64(state.finish())
    }
    #[cfg(not(any(feature = "fxhash", feature = "ahash")))]
    {
        let hash = mix64(key as u64);
        (hash ^ (hash >> 32)) as u32
    }
}
