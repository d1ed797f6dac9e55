//! Benchmark for cursor pipelines vs standard iterator chains.
//!
//! Compares lazyrange pipelines against the equivalent `std::iter` chains
//! for the adaptors that change the traversal shape.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyrange::algorithm;
use lazyrange::prelude::*;
use std::hint::black_box;

// =============================================================================
// filter | map | take Benchmark
// =============================================================================

fn benchmark_filter_map_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map_take");

    for size in [100, 1000, 10000] {
        let data: Vec<i64> = (0..size).collect();
        let limit = usize::try_from(size / 4).unwrap_or(0);

        // Cursor pipeline
        group.bench_with_input(BenchmarkId::new("lazyrange", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = (data
                    | filter(|value: &i64| value % 3 == 0)
                    | map(|value: &i64| value * 2)
                    | take(limit))
                .sum();
                black_box(total)
            });
        });

        // Standard iterator chain
        group.bench_with_input(BenchmarkId::new("std", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = data
                    .iter()
                    .filter(|value| *value % 3 == 0)
                    .map(|value| value * 2)
                    .take(limit)
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// reverse Benchmark (Bidirectional)
// =============================================================================

fn benchmark_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reverse");

    for size in [100, 1000, 10000] {
        let data: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("lazyrange", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = (data | filter(|value: &i64| value % 2 == 1) | reverse()).sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = data.iter().filter(|value| *value % 2 == 1).rev().sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [100, 1000] {
        let data: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("lazyrange", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = (data | flat_map(|value: &i64| iota(0, value % 8))).sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: i64 = data.iter().flat_map(|value| 0..value % 8).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// lower_bound Benchmark (Random Access)
// =============================================================================

fn benchmark_lower_bound(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lower_bound");

    for size in [1000, 100_000] {
        let data: Vec<i64> = (0..size).map(|value| value * 2).collect();
        let needle = size;

        group.bench_with_input(BenchmarkId::new("lazyrange", size), &data, |bencher, data| {
            bencher.iter(|| {
                let found = algorithm::lower_bound(data, black_box(&needle));
                black_box(found.is_found())
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |bencher, data| {
            bencher.iter(|| {
                let found = data.partition_point(|value| *value < black_box(needle));
                black_box(found < data.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_map_take,
    benchmark_reverse,
    benchmark_flat_map,
    benchmark_lower_bound
);
criterion_main!(benches);
