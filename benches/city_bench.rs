//! Criterion benchmarks for city-anneal.
//!
//! Seeded layouts of a few sizes: scoring, one mutation, and short
//! end-to-end runs.

use city_anneal::grid::Grid;
use city_anneal::mutation::{mutate, MutationWeights};
use city_anneal::optimizer::{connect_residences, CityOptimizer, OptimizerConfig};
use city_anneal::score::score;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 3] = [16, 32, 64];

fn seeded(size: usize) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    Grid::random_initial_city(size, size, &mut rng).expect("non-zero dimensions")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for size in SIZES {
        let grid = seeded(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| black_box(score(black_box(g))))
        });
    }
    group.finish();
}

fn bench_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");
    let weights = MutationWeights::default();

    for size in SIZES {
        let grid = seeded(size);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| black_box(mutate(black_box(g), &weights, &mut rng)))
        });
    }
    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");

    for size in SIZES {
        let grid = seeded(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| {
                let mut copy = g.clone();
                black_box(connect_residences(&mut copy))
            })
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    for (size, iterations) in [(16usize, 500usize), (32, 300)] {
        let config = OptimizerConfig::new(size, size).with_iterations(iterations);
        group.bench_with_input(
            BenchmarkId::new(format!("s{size}_i{iterations}"), size),
            &config,
            |b, cfg| {
                b.iter(|| {
                    let result = CityOptimizer::run(black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_score, bench_mutate, bench_repair, bench_optimize);
criterion_main!(benches);
