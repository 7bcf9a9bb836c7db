//! IAI-Callgrind benchmark for SortedVector merges.
//!
//! Measures instruction counts for the merge dot product, the union merge
//! behind elementwise sums and bulk construction from unsorted arrays.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use primvec::vector::{PrimitiveVector, SortedVector};
use std::hint::black_box;

fn setup_pair(size: i32) -> (SortedVector<i32, f64>, SortedVector<i32, f64>) {
    let left = (0..size).map(|index| (index * 3, f64::from(index))).collect();
    let right = (0..size).map(|index| (index * 5, f64::from(index))).collect();
    (left, right)
}

fn setup_unsorted(size: i32) -> (Vec<i32>, Vec<f64>) {
    let keys: Vec<i32> = (0..size).map(|index| (index * 7_919 % size) * 7).collect();
    let values = keys.iter().map(|&key| f64::from(key)).collect();
    (keys, values)
}

#[library_benchmark]
#[bench::small(setup_pair(100))]
#[bench::large(setup_pair(10_000))]
fn merge_dot(pair: (SortedVector<i32, f64>, SortedVector<i32, f64>)) -> f64 {
    black_box(pair.0.dot(black_box(&pair.1)))
}

#[library_benchmark]
#[bench::small(setup_pair(100))]
#[bench::large(setup_pair(10_000))]
fn merge_elementwise_sum(pair: (SortedVector<i32, f64>, SortedVector<i32, f64>)) -> SortedVector<i32, f64> {
    black_box(pair.0.elementwise_sum(black_box(&pair.1)))
}

#[library_benchmark]
#[bench::small(setup_unsorted(100))]
#[bench::large(setup_unsorted(10_000))]
fn from_unsorted(arrays: (Vec<i32>, Vec<f64>)) -> SortedVector<i32, f64> {
    let (keys, values) = black_box(arrays);
    black_box(SortedVector::from_unsorted(keys, values).unwrap())
}

library_benchmark_group!(
    name = sorted_vector_group;
    benchmarks = merge_dot, merge_elementwise_sum, from_unsorted
);

main!(library_benchmark_groups = sorted_vector_group);
