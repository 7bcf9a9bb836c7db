//! # primvec
//!
//! Primitive-keyed sparse maps and sparse/dense vectors for numerical code.
//!
//! ## Overview
//!
//! Feature vectors in learning pipelines are mostly zeros, keyed by `i32` or
//! `i64` feature ids and holding `i32`, `i64`, `f32` or `f64` values. This
//! crate stores them without boxing and implements the algebra on top:
//!
//! - **Dual-array sort**: in-place quicksort of a key array with a parallel
//!   value array
//! - **Maps**: an open-addressing hash map with back-shift deletion and a
//!   sorted dual-array map, behind one [`PrimitiveMap`](map::PrimitiveMap)
//!   contract
//! - **Vectors**: sorted, hashed and dense vectors sharing the
//!   [`PrimitiveVector`](vector::PrimitiveVector) contract, with merge-based
//!   dot products, elementwise arithmetic and zero stripping
//! - **Aliases**: `IntDoubleSortedVector`, `LongFloatHashMap` and friends
//!
//! ## Feature Flags
//!
//! - `sort`: Dual-array quicksort
//! - `map`: Map contract and both backends (implies `sort`)
//! - `vector`: Vector contract and the three vectors (implies `map`)
//! - `aliases`: Per type-pair aliases (implies `vector`)
//! - `fxhash`: Hash keys with `rustc-hash`
//! - `ahash`: Hash keys with `ahash`
//! - `logging`: Emit `log` records when containers grow or shrink
//! - `full`: Everything except the alternative hashers
//!
//! ## Example
//!
//! ```rust
//! use primvec::prelude::*;
//!
//! let query = SortedVector::from_sorted(vec![2, 5, 9], vec![1.0, 2.0, 3.0]).unwrap();
//! let document: HashVector<i32, f64> = [(5, 0.5), (9, 1.0)].into_iter().collect();
//!
//! assert_eq!(query.dot(&document), 4.0);
//! assert_eq!(query.inf_norm(), 3.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the error types, the primitive traits and every enabled
/// container.
///
/// # Usage
///
/// ```rust
/// use primvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::primitive::{Primitive, PrimitiveKey, PrimitiveValue};

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "map")]
    pub use crate::map::*;

    #[cfg(feature = "vector")]
    pub use crate::vector::{DenseVector, HashVector, PrimitiveVector, SortedVector, SparseMapLike};

    #[cfg(feature = "aliases")]
    pub use crate::aliases::*;
}

pub mod error;
pub mod primitive;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "vector")]
pub mod vector;

#[cfg(feature = "aliases")]
pub mod aliases;
