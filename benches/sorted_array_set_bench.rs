//! SortedArraySet construction, lookup and removal benchmarks.
//!
//! Compares bulk construction (`From<Vec>`) against incremental `insert`
//! (baseline), measures binary-search lookups and threshold-crossing bulk
//! removal, and times the intern pool's hit and miss paths.
//!
//! Pre-generated Vecs are reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use leanset::SortedArraySet;
use leanset::intern::InternPool;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates a deterministic permutation of `0..size` so construction
/// benchmarks pay for real sorting work.
fn generate_shuffled_vec(size: i32) -> Vec<i32> {
    (0..size).map(|value| (value * 7919) % size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_bulk_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_from_vec");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        group.bench_with_input(BenchmarkId::new("from_vec", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(SortedArraySet::from(black_box(elements))),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_fold_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_fold_insert");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        group.bench_with_input(
            BenchmarkId::new("fold_insert", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        let mut set = SortedArraySet::new();
                        for element in elements {
                            set.insert(black_box(element));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_contains");

    for size in SIZES {
        let set: SortedArraySet<i32> = generate_shuffled_vec(size).into();
        let present = size / 2;
        let absent = size + 1;

        group.bench_with_input(BenchmarkId::new("hit", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box(&present))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box(&absent))));
        });
    }

    group.finish();
}

fn benchmark_bulk_removal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_remove_all");

    for size in SIZES {
        let base_set: SortedArraySet<i32> = generate_shuffled_vec(size).into();
        let probes: Vec<i32> = (0..size).step_by(10).collect();

        group.bench_with_input(
            BenchmarkId::new("every_tenth", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_set.clone(),
                    |mut set| {
                        black_box(set.remove_all(black_box(&probes)));
                        set
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_interning(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intern_pool");

    for size in SIZES {
        let vocabulary: Vec<String> = (0..size).map(|value| format!("name-{value}")).collect();

        group.bench_with_input(
            BenchmarkId::new("miss", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    InternPool::new,
                    |pool| {
                        for name in &vocabulary {
                            black_box(pool.intern(black_box(name)));
                        }
                        pool
                    },
                    batch_size_for(size),
                );
            },
        );

        let populated = InternPool::new();
        for name in &vocabulary {
            populated.intern(name);
        }
        group.bench_with_input(
            BenchmarkId::new("hit", size),
            &populated,
            |bencher, pool| {
                bencher.iter(|| black_box(pool.intern(black_box("name-0"))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bulk_construction,
    benchmark_fold_insert,
    benchmark_contains,
    benchmark_bulk_removal,
    benchmark_interning
);

criterion_main!(benches);
