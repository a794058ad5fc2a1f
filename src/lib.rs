//! Chunkly: a small numeric-computation runtime.
//!
//! A type-tagged scalar dispatch layer combined with a fixed worker-thread
//! pool, used to execute element-wise operations over contiguous `f32`
//! buffers (vectors and matrices) in parallel chunks. The executor partitions
//! an operation into one contiguous chunk per worker, submits one task per
//! chunk to a bounded queue, and blocks until the queue drains.

pub mod error;
pub mod executor;
pub mod linalg;
pub mod numeric;
pub mod pool;

pub use error::{ChunklyError, Result};
pub use executor::{
    chunk_ranges, sequential_elementwise, sequential_elementwise_scalar, ParallelExecutor,
};
pub use linalg::{Matrix, NumericBuffer, Vector};
pub use numeric::{
    decode_f32, dispatch, dispatch_codes, encode_f32, ArithmeticKind, NumericTag, NumericValue,
};
pub use pool::{Task, TaskOperand, TaskQueue, ThreadPool};

/// Fallback worker count when the platform offers no processor-count facility.
pub const DEFAULT_WORKERS: usize = 8;
