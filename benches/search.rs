//! Benchmarks for the exhaustive search over the reference puzzle.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use summle::search;

const REFERENCE_INPUT: [i64; 6] = [2, 3, 6, 7, 10, 75];
const REFERENCE_NUM_SOLUTIONS: usize = 405_677;

fn bench_reference_search(c: &mut Criterion) {
    // Regression check before timing anything
    assert_eq!(
        search(&REFERENCE_INPUT).total_solutions(),
        REFERENCE_NUM_SOLUTIONS
    );

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("reference_puzzle", |b| {
        b.iter(|| black_box(search(black_box(&REFERENCE_INPUT))))
    });
    group.finish();
}

fn bench_search_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_size");

    for size in 2..=5 {
        let sources = &REFERENCE_INPUT[..size];
        group.bench_with_input(BenchmarkId::new("sources", size), &sources, |b, sources| {
            b.iter(|| black_box(search(sources)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reference_search, bench_search_by_size);
criterion_main!(benches);
