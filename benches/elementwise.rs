//! Element-wise Addition Benchmarks Across Execution Strategies
//!
//! This benchmark suite compares the worker-pool executor against the
//! single-threaded path and against two ecosystem baselines (rayon and
//! ndarray) across vector sizes spanning the CPU cache hierarchy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use chunkly::{sequential_elementwise, ArithmeticKind, ParallelExecutor, Vector};

/// Vector sizes targeting successive levels of the memory hierarchy
/// (f32 = 4 bytes, so 262_144 elements = 1 MiB).
const VECTOR_SIZES: &[usize] = &[
    4_096,      // 16 KiB - L1 cache
    65_536,     // 256 KiB - L2 cache
    1_048_576,  // 4 MiB - L2→L3 transition
    16_777_216, // 64 MiB - L3→RAM transition
];

/// Below this size the pool's submission overhead typically exceeds the
/// benefit; the sequential baseline makes that visible.
const PARALLEL_THRESHOLD: usize = 65_536;

fn random_vector(rng: &mut StdRng, len: usize) -> Vector {
    let values: Vec<f32> = (0..len).map(|_| rng.random_range(-100.0..100.0)).collect();
    Vector::from_slice(&values)
}

fn bench_addition(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let executor = ParallelExecutor::new(0).expect("pool construction");

    let mut group = c.benchmark_group("elementwise_add");

    for &size in VECTOR_SIZES {
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);

        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    sequential_elementwise(ArithmeticKind::Add, black_box(&a), black_box(&b))
                        .unwrap(),
                )
            })
        });

        if size >= PARALLEL_THRESHOLD {
            group.bench_with_input(BenchmarkId::new("pool", size), &size, |bencher, _| {
                bencher.iter(|| black_box(executor.add(black_box(&a), black_box(&b)).unwrap()))
            });

            group.bench_with_input(BenchmarkId::new("rayon", size), &size, |bencher, _| {
                bencher.iter(|| {
                    let sum: Vec<f32> = a
                        .as_slice()
                        .par_iter()
                        .zip(b.as_slice().par_iter())
                        .map(|(x, y)| x + y)
                        .collect();
                    black_box(sum)
                })
            });
        }

        let a_nd = Array1::from_vec(a.as_slice().to_vec());
        let b_nd = Array1::from_vec(b.as_slice().to_vec());
        group.bench_with_input(BenchmarkId::new("ndarray", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&a_nd) + black_box(&b_nd)))
        });
    }

    group.finish();
}

fn bench_divide(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1337);
    let executor = ParallelExecutor::new(0).expect("pool construction");

    let mut group = c.benchmark_group("elementwise_divide");

    for &size in &[65_536usize, 1_048_576] {
        let a = random_vector(&mut rng, size);
        // Offset away from zero so the NaN reporting path stays cold.
        let b = Vector::from_slice(
            &(0..size)
                .map(|_| rng.random_range(1.0..100.0))
                .collect::<Vec<f32>>(),
        );

        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    sequential_elementwise(ArithmeticKind::Divide, black_box(&a), black_box(&b))
                        .unwrap(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("pool", size), &size, |bencher, _| {
            bencher.iter(|| black_box(executor.divide(black_box(&a), black_box(&b)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_addition, bench_divide);
criterion_main!(benches);
