//! Demo binary: element-wise vector math through the worker pool, checked
//! against the single-threaded path and timed.

use std::time::Instant;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chunkly::{sequential_elementwise, ArithmeticKind, ParallelExecutor, Vector};

/// Number of elements in each demo vector.
const COLUMNS: usize = 1_000_000;

fn random_vector(rng: &mut StdRng, columns: usize) -> Vector {
    let values: Vec<f32> = (0..columns).map(|_| rng.random_range(-100.0..100.0)).collect();
    Vector::from_slice(&values)
}

fn report(label: &str, elapsed_ms: f64) {
    println!(
        "[{}] {label}: {elapsed_ms:.3} ms",
        Local::now().format("%H:%M:%S%.3f")
    );
}

fn main() -> chunkly::Result<()> {
    let mut rng = StdRng::seed_from_u64(1337);
    let a = random_vector(&mut rng, COLUMNS);
    let b = random_vector(&mut rng, COLUMNS);

    let executor = ParallelExecutor::new(0)?;
    println!(
        "chunkly demo: {} elements, {} workers\n",
        COLUMNS,
        executor.worker_count()
    );

    for kind in [
        ArithmeticKind::Add,
        ArithmeticKind::Subtract,
        ArithmeticKind::Multiply,
        ArithmeticKind::Divide,
    ] {
        let start = Instant::now();
        let parallel = executor.elementwise(kind, &a, &b)?;
        let parallel_ms = start.elapsed().as_secs_f64() * 1e3;

        let start = Instant::now();
        let sequential = sequential_elementwise(kind, &a, &b)?;
        let sequential_ms = start.elapsed().as_secs_f64() * 1e3;

        // Bit-level comparison so a NaN produced by both paths (zero
        // divisor) still counts as agreement.
        let identical = parallel
            .as_slice()
            .iter()
            .zip(sequential.as_slice())
            .all(|(p, s)| p.to_bits() == s.to_bits());
        assert!(identical, "{kind:?}: pooled and sequential paths diverged");

        report(&format!("{kind:?} (pooled)"), parallel_ms);
        report(&format!("{kind:?} (sequential)"), sequential_ms);
        println!();
    }

    println!("All pooled results matched the single-threaded path.");
    Ok(())
}
