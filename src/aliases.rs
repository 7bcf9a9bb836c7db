//! Concrete names for every key/value pairing.
//!
//! Each pairing of a key type (`Int` = [`i32`], `Long` = [`i64`]) with a
//! value type (`Int`, `Long`, `Float` = [`f32`], `Double` = [`f64`]) gets one
//! alias per container, e.g. [`IntDoubleSortedVector`] or
//! [`LongFloatHashMap`].
//!
//! # Examples
//!
//! ```rust
//! use primvec::aliases::{IntDoubleSortedVector, LongIntHashMap};
//! use primvec::vector::PrimitiveVector;
//!
//! let features = IntDoubleSortedVector::from_sorted(vec![0, 7], vec![1.0, 0.5]).unwrap();
//! assert_eq!(features.dot_dense(&[2.0; 8]), 3.0);
//!
//! let mut counts = LongIntHashMap::new();
//! counts.adjust_or_put(1 << 40, 1, 1);
//! assert_eq!(counts.get(1 << 40), 1);
//! ```

use crate::map::{PrimitiveHashMap, SortedMap};
use crate::vector::{DenseVector, HashVector, SortedVector};

macro_rules! define_aliases {
    ($($key_name:ident: $key:ty => $($value_name:ident: $value:ty),+;)+) => {
        $($(
            define_aliases!(@pair $key_name $key, $value_name $value);
        )+)+
    };
    (@pair $key_name:ident $key:ty, $value_name:ident $value:ty) => {
        paste::paste! {
            #[doc = concat!("[`SortedMap`] from `", stringify!($key), "` to `", stringify!($value), "`.")]
            pub type [<$key_name $value_name SortedMap>] = SortedMap<$key, $value>;

            #[doc = concat!("[`PrimitiveHashMap`] from `", stringify!($key), "` to `", stringify!($value), "`.")]
            pub type [<$key_name $value_name HashMap>] = PrimitiveHashMap<$key, $value>;

            #[doc = concat!("[`SortedVector`] with `", stringify!($key), "` keys and `", stringify!($value), "` values.")]
            pub type [<$key_name $value_name SortedVector>] = SortedVector<$key, $value>;

            #[doc = concat!("[`HashVector`] with `", stringify!($key), "` keys and `", stringify!($value), "` values.")]
            pub type [<$key_name $value_name HashVector>] = HashVector<$key, $value>;

            #[doc = concat!("[`DenseVector`] with `", stringify!($key), "` keys and `", stringify!($value), "` values.")]
            pub type [<$key_name $value_name DenseVector>] = DenseVector<$key, $value>;
        }
    };
}

define_aliases! {
    Int: i32 => Int: i32, Long: i64, Float: f32, Double: f64;
    Long: i64 => Int: i32, Long: i64, Float: f32, Double: f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::PrimitiveVector;
    use rstest::rstest;

    #[rstest]
    fn test_aliases_resolve_to_generic_containers() {
        let mut vector = LongFloatHashVector::new();
        vector.add_at(3, 1.5);
        let generic: &HashVector<i64, f32> = &vector;
        assert_eq!(generic.get(3), 1.5);

        let map: IntIntSortedMap = [(2, 20), (1, 10)].into_iter().collect();
        assert_eq!(map.keys(), &[1, 2]);

        let dense = IntLongDenseVector::from_vec(vec![1_i64, 2]);
        assert_eq!(dense.sum(), 3);
    }
}
