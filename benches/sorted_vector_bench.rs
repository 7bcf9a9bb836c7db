//! SortedVector merge benchmark.
//!
//! Compares the merge-based dot product and elementwise sum of two sorted
//! vectors against the lookup-based paths taken when one side is hashed.
//! Both operands hold `size` entries drawn from a key space ten times larger,
//! so roughly a tenth of the keys overlap.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primvec::vector::{HashVector, PrimitiveVector, SortedVector};
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1_000, 10_000];

/// Deterministic keys spaced by `stride`, starting at `offset`.
fn generate_vector(size: i32, stride: i32, offset: i32) -> SortedVector<i32, f64> {
    (0..size)
        .map(|index| (index * stride + offset, f64::from(index % 17) - 8.0))
        .collect()
}

fn benchmark_dot(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_vector_dot");

    for size in SIZES {
        let left = generate_vector(size, 10, 0);
        let right = generate_vector(size, 7, 3);
        let hashed: HashVector<i32, f64> = right.iter().collect();

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&left).dot(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("lookup", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&left).dot(black_box(&hashed))));
        });
    }

    group.finish();
}

fn benchmark_elementwise_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_vector_elementwise_sum");

    for size in SIZES {
        let left = generate_vector(size, 10, 0);
        let right = generate_vector(size, 7, 3);

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&left).elementwise_sum(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("add_at", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut result = left.clone();
                for (key, value) in right.iter() {
                    result.add_at(black_box(key), value);
                }
                black_box(result)
            });
        });
    }

    group.finish();
}

fn benchmark_dot_dense(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_vector_dot_dense");

    for size in SIZES {
        let sparse = generate_vector(size, 10, 0);
        let dense: Vec<f64> = (0..size * 10).map(|index| f64::from(index % 5)).collect();

        group.bench_with_input(BenchmarkId::new("dot_dense", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&sparse).dot_dense(black_box(&dense))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dot,
    benchmark_elementwise_sum,
    benchmark_dot_dense
);

criterion_main!(benches);
