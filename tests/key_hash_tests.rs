//! Tests for key hashing, whichever hasher the build selects.
//!
//! The open-addressing map relies on the low bits of the hash being well
//! spread for runs of sequential keys and for keys differing only in their
//! high bits.

use primvec::primitive::{PrimitiveKey, hash_of_i32, hash_of_i64};
use rstest::rstest;
use std::collections::HashSet;

fn occupied_buckets(hashes: impl Iterator<Item = u32>, buckets: u32) -> usize {
    hashes
        .map(|hash| hash & (buckets - 1))
        .collect::<HashSet<_>>()
        .len()
}

#[rstest]
fn test_hashing_is_deterministic() {
    for key in [-7, 0, 1, 1 << 20, i32::MAX] {
        assert_eq!(hash_of_i32(key), hash_of_i32(key));
        assert_eq!(key.hash_key(), hash_of_i32(key));
    }
    for key in [-7_i64, 0, 1 << 40, i64::MIN] {
        assert_eq!(hash_of_i64(key), hash_of_i64(key));
        assert_eq!(key.hash_key(), hash_of_i64(key));
    }
}

#[rstest]
#[case(64)]
#[case(1024)]
fn test_sequential_int_keys_spread(#[case] buckets: u32) {
    let occupied = occupied_buckets((0..buckets as i32).map(hash_of_i32), buckets);
    assert!(occupied > buckets as usize / 2, "{occupied} of {buckets} buckets used");
}

#[rstest]
fn test_high_bit_long_keys_spread() {
    let occupied = occupied_buckets((32..64).map(|shift| hash_of_i64(1_i64 << (shift % 63))), 64);
    assert!(occupied > 8, "{occupied} buckets used");
}

#[rstest]
fn test_distinct_small_keys_rarely_collide() {
    let hashes: HashSet<u32> = (0..10_000).map(hash_of_i32).collect();
    assert!(hashes.len() > 9_990);
}
