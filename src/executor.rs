//! The parallel element-wise executor.
//!
//! Applies a binary scalar operation element-wise across two same-length
//! containers (or one container and a broadcast scalar), producing a new
//! container of the same shape. The input is partitioned into one contiguous
//! chunk per worker, one task per chunk is submitted to the pool, and the
//! calling thread blocks on the queue drain before the result is returned.
//!
//! Chunk ranges partition the index space exactly (no gap, no overlap), so
//! workers write disjoint slices of the shared result and the output is
//! deterministic regardless of scheduling. [`sequential_elementwise`] is the
//! pool-free path; it applies the same dispatch-resolved kernel in index order
//! and produces bit-identical results.

use num::Float;

use crate::error::{dimension_mismatch, Result};
use crate::linalg::NumericBuffer;
use crate::numeric::{float_kernel, ArithmeticKind, FloatKernel, NumericTag};
use crate::pool::{Task, TaskOperand, ThreadPool};

/// Splits `len` indices into at most `workers` contiguous half-open ranges.
///
/// Every chunk holds `len / W` indices and the final chunk absorbs the
/// remainder, so the ranges cover `[0, len)` exactly once. The worker count is
/// clamped to `[1, len]` so no chunk is empty; a zero-length input yields no
/// chunks at all.
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }

    let count = workers.clamp(1, len);
    let chunk = len / count;

    let mut ranges = Vec::with_capacity(count);
    for i in 0..count {
        let begin = i * chunk;
        let end = if i == count - 1 { len } else { begin + chunk };
        ranges.push((begin, end));
    }
    ranges
}

/// An element-wise executor backed by a fixed worker pool.
///
/// The drain wait is pool-wide, so one executor is meant to serve one logical
/// stream of operations; concurrent submitters sharing an executor also wait
/// for each other's chunks.
pub struct ParallelExecutor {
    pool: ThreadPool,
}

impl ParallelExecutor {
    /// Creates an executor over a new pool; `worker_count` of `0` asks the
    /// platform for the available processor count.
    pub fn new(worker_count: usize) -> Result<Self> {
        Ok(ParallelExecutor {
            pool: ThreadPool::new(worker_count)?,
        })
    }

    /// The worker count of the backing pool.
    pub fn worker_count(&self) -> usize {
        self.pool.worker_count()
    }

    /// Applies `kind` element-wise across two same-length containers.
    ///
    /// Fails with `DimensionMismatch` before allocating a result when the
    /// operand lengths differ, and with `AllocationFailure` before touching
    /// the pool when the result cannot be allocated.
    pub fn elementwise<B: NumericBuffer>(&self, kind: ArithmeticKind, a: &B, b: &B) -> Result<B> {
        if a.len() != b.len() {
            log::error!(
                "Operand dimensions do not match. Cannot perform operation on \
                 containers of size {} and {}.",
                a.len(),
                b.len()
            );
            return Err(dimension_mismatch(
                a.len(),
                b.len(),
                "element-wise operands must have the same length",
            ));
        }

        let mut result = a.like()?;
        let kernel = float_kernel(kind);

        {
            let a_buf = a.as_slice();
            let b_buf = b.as_slice();
            let out = result.as_mut_slice();

            for (begin, end) in chunk_ranges(a_buf.len(), self.pool.worker_count()) {
                // SAFETY: chunk ranges are pairwise disjoint and cover the
                // buffers exactly; all three buffers outlive the drain below.
                let task = unsafe {
                    Task::new(
                        a_buf.as_ptr(),
                        TaskOperand::Buffer(b_buf.as_ptr()),
                        out.as_mut_ptr(),
                        begin,
                        end,
                        NumericTag::F32,
                        kernel,
                    )
                };
                self.pool.submit(task);
            }
            self.pool.wait_drained();
        }

        if kind == ArithmeticKind::Divide {
            report_division_failures(result.as_slice());
        }
        Ok(result)
    }

    /// Applies `kind` element-wise between a container and a broadcast scalar.
    pub fn elementwise_scalar<B: NumericBuffer>(
        &self,
        kind: ArithmeticKind,
        a: &B,
        b: f32,
    ) -> Result<B> {
        let mut result = a.like()?;
        let kernel = float_kernel(kind);

        {
            let a_buf = a.as_slice();
            let out = result.as_mut_slice();

            for (begin, end) in chunk_ranges(a_buf.len(), self.pool.worker_count()) {
                // SAFETY: same contract as the container-container path.
                let task = unsafe {
                    Task::new(
                        a_buf.as_ptr(),
                        TaskOperand::Scalar(b),
                        out.as_mut_ptr(),
                        begin,
                        end,
                        NumericTag::F32,
                        kernel,
                    )
                };
                self.pool.submit(task);
            }
            self.pool.wait_drained();
        }

        if kind == ArithmeticKind::Divide {
            report_division_failures(result.as_slice());
        }
        Ok(result)
    }

    /// Element-wise addition of two containers.
    pub fn add<B: NumericBuffer>(&self, a: &B, b: &B) -> Result<B> {
        self.elementwise(ArithmeticKind::Add, a, b)
    }

    /// Element-wise subtraction of two containers.
    pub fn subtract<B: NumericBuffer>(&self, a: &B, b: &B) -> Result<B> {
        self.elementwise(ArithmeticKind::Subtract, a, b)
    }

    /// Element-wise multiplication of two containers.
    pub fn multiply<B: NumericBuffer>(&self, a: &B, b: &B) -> Result<B> {
        self.elementwise(ArithmeticKind::Multiply, a, b)
    }

    /// Element-wise division of two containers. Zero divisors yield NaN in
    /// the corresponding result elements (recoverable per-element failure).
    pub fn divide<B: NumericBuffer>(&self, a: &B, b: &B) -> Result<B> {
        self.elementwise(ArithmeticKind::Divide, a, b)
    }

    /// Adds a scalar to every element.
    pub fn scalar_add<B: NumericBuffer>(&self, a: &B, b: f32) -> Result<B> {
        self.elementwise_scalar(ArithmeticKind::Add, a, b)
    }

    /// Subtracts a scalar from every element.
    pub fn scalar_subtract<B: NumericBuffer>(&self, a: &B, b: f32) -> Result<B> {
        self.elementwise_scalar(ArithmeticKind::Subtract, a, b)
    }

    /// Multiplies every element by a scalar.
    pub fn scalar_multiply<B: NumericBuffer>(&self, a: &B, b: f32) -> Result<B> {
        self.elementwise_scalar(ArithmeticKind::Multiply, a, b)
    }

    /// Divides every element by a scalar. A zero divisor yields NaN for every
    /// element.
    pub fn scalar_divide<B: NumericBuffer>(&self, a: &B, b: f32) -> Result<B> {
        self.elementwise_scalar(ArithmeticKind::Divide, a, b)
    }
}

/// Pool-free element-wise path over two same-length containers.
///
/// Bit-identical to [`ParallelExecutor::elementwise`] for the same inputs:
/// both resolve the same kernel through the dispatch table and apply it to
/// every index exactly once.
pub fn sequential_elementwise<B: NumericBuffer>(kind: ArithmeticKind, a: &B, b: &B) -> Result<B> {
    if a.len() != b.len() {
        log::error!(
            "Operand dimensions do not match. Cannot perform operation on \
             containers of size {} and {}.",
            a.len(),
            b.len()
        );
        return Err(dimension_mismatch(
            a.len(),
            b.len(),
            "element-wise operands must have the same length",
        ));
    }

    let mut result = a.like()?;
    let kernel = float_kernel(kind);
    apply_sequential(kernel, a.as_slice(), b.as_slice(), result.as_mut_slice());

    if kind == ArithmeticKind::Divide {
        report_division_failures(result.as_slice());
    }
    Ok(result)
}

/// Pool-free element-wise path between a container and a broadcast scalar.
pub fn sequential_elementwise_scalar<B: NumericBuffer>(
    kind: ArithmeticKind,
    a: &B,
    b: f32,
) -> Result<B> {
    let mut result = a.like()?;
    let kernel = float_kernel(kind);
    for (out, &x) in result.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *out = kernel(x, b);
    }

    if kind == ArithmeticKind::Divide {
        report_division_failures(result.as_slice());
    }
    Ok(result)
}

fn apply_sequential(kernel: FloatKernel, a: &[f32], b: &[f32], out: &mut [f32]) {
    for i in 0..out.len() {
        out[i] = kernel(a[i], b[i]);
    }
}

/// Reports NaN sentinels left behind by a division drain. The result is still
/// returned to the caller; downstream aggregates must treat NaN as a failed
/// computation, not as a valid number.
fn report_division_failures(result: &[f32]) {
    let failures = result.iter().filter(|x| Float::is_nan(**x)).count();
    if failures > 0 {
        log::warn!(
            "division produced {} NaN element(s); treating them as failed computations",
            failures
        );
    }
}
