//! Benchmarks for the beginner-method solver.
//!
//! # Benchmarks
//!
//! - **`solve`**: Solves cubes scrambled from fixed seeds with all five
//!   phases, including the initial reachability check.
//! - **`phase`**: Runs each phase alone on the cube left by the earlier
//!   phases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rubik_core::Cube;
use rubik_scrambler::{ScrambleGenerator, ScrambleSeed};
use rubik_solver::{BeginnerSolver, phase};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn scrambled_cubes() -> Vec<Cube> {
    let generator = ScrambleGenerator::new(25);
    SEEDS
        .into_iter()
        .map(|seed| {
            generator
                .generate_with_seed(ScrambleSeed::from_str(seed).unwrap())
                .cube
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let solver = BeginnerSolver::with_all_phases();
    for (i, cube) in scrambled_cubes().into_iter().enumerate() {
        c.bench_with_input(BenchmarkId::new("solve", format!("seed_{i}")), &cube, |b, cube| {
            b.iter(|| solver.solve(hint::black_box(cube)).unwrap());
        });
    }
}

fn bench_phases(c: &mut Criterion) {
    let mut current = scrambled_cubes().swap_remove(0);
    for phase in phase::all_phases() {
        c.bench_with_input(
            BenchmarkId::new("phase", phase.name()),
            &current,
            |b, cube| {
                b.iter_batched(
                    || hint::black_box(cube.clone()),
                    |cube| phase.solve(cube).unwrap(),
                    BatchSize::SmallInput,
                );
            },
        );
        current = phase.solve(current).unwrap().cube;
    }
}

criterion_group!(benches, bench_solve, bench_phases);
criterion_main!(benches);
