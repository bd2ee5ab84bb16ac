//! Benchmarks for the draining SequenceView operations
//!
//! Run with: `cargo bench --bench sequence_view`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluent_core::prelude::*;
use fluent_core::list as list_of;

const SIZES: [usize; 4] = [8, 64, 1024, 16384];

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |b, &size| {
            b.iter(|| {
                let mapped = list_of(0..size as i64).map(multiply(black_box(3)));
                black_box(mapped);
            });
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("sum", size), &size, |b, &size| {
            b.iter(|| black_box(list_of(0..size as i64).reduce(sum())));
        });

        group.bench_with_input(BenchmarkId::new("max", size), &size, |b, &size| {
            b.iter(|| black_box(list_of(0..size as i64).reduce(max())));
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("comma", size), &size, |b, &size| {
            b.iter(|| black_box(list_of(0..size as i64).join(", ")));
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |b, &size| {
            b.iter(|| {
                let mut view = list_of(0..size as i64);
                view.reverse();
                black_box(view);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map, bench_reduce, bench_join, bench_reverse);
criterion_main!(benches);
