//! A fixed worker-thread pool over a bounded task queue.
//!
//! Workers are started once at pool construction and joined at destruction;
//! the pool never resizes. Each worker loops between idle (blocked on the
//! queue's "has work" signal) and executing one task's index range, until the
//! shutdown signal arrives while the queue is empty.

pub mod queue;
pub mod task;

pub use queue::TaskQueue;
pub use task::{Task, TaskOperand};

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::{thread_start, Result};
use crate::DEFAULT_WORKERS;

/// Worker count to use when the caller leaves it unspecified: the detected
/// available parallelism, or [`DEFAULT_WORKERS`] when the platform offers no
/// such facility.
pub fn detected_parallelism() -> usize {
    thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(DEFAULT_WORKERS)
}

/// A fixed set of worker threads consuming tasks from a shared [`TaskQueue`].
pub struct ThreadPool {
    queue: Arc<TaskQueue>,
    workers: Vec<JoinHandle<()>>,
    worker_count: usize,
}

impl ThreadPool {
    /// Starts a pool with `worker_count` threads; `0` asks the platform for
    /// the available processor count (fallback [`DEFAULT_WORKERS`]).
    ///
    /// The queue is sized to the worker count, so one submission burst of one
    /// task per worker never blocks the producer.
    ///
    /// If a thread fails to start partway through construction, every
    /// already-started worker is shut down and joined before the
    /// [`ChunklyError::ThreadStart`](crate::ChunklyError::ThreadStart) failure
    /// is reported; no threads are leaked.
    pub fn new(worker_count: usize) -> Result<Self> {
        let count = if worker_count == 0 {
            detected_parallelism()
        } else {
            worker_count
        };

        let queue = Arc::new(TaskQueue::with_capacity(count));
        let mut workers = Vec::new();

        for id in 0..count {
            let worker_queue = Arc::clone(&queue);
            let spawned = thread::Builder::new()
                .name(format!("chunkly-worker-{id}"))
                .spawn(move || worker_loop(id, worker_queue));

            match spawned {
                Ok(handle) => workers.push(handle),
                Err(error) => {
                    log::error!("failed to start worker {id}: {error}");
                    queue.close();
                    for handle in workers {
                        let _ = handle.join();
                    }
                    return Err(thread_start(format!("worker {id}: {error}")));
                }
            }
        }

        Ok(ThreadPool {
            queue,
            workers,
            worker_count: count,
        })
    }

    /// The fixed number of workers this pool was created with.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Submits one task; blocks while the queue is at capacity.
    pub fn submit(&self, task: Task) {
        self.queue.submit(task);
    }

    /// Blocks until every submitted task has completed.
    ///
    /// The drain is pool-wide: a caller sharing the pool with other submitters
    /// also waits for their outstanding tasks.
    pub fn wait_drained(&self) {
        self.queue.wait_drained();
    }

    /// Stops the pool: sets the stop flag, wakes every blocked worker, and
    /// joins all worker threads. In-flight tasks finish first. Idempotent:
    /// calling it on an already-stopped pool is a no-op.
    pub fn shutdown(&mut self) {
        if self.workers.is_empty() {
            return;
        }
        self.queue.close();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("worker thread panicked during shutdown");
            }
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(id: usize, queue: Arc<TaskQueue>) {
    while let Some(task) = queue.pop() {
        if task.is_empty() {
            log::trace!("worker {id}: skipping empty chunk");
        } else {
            let (begin, end) = task.range();
            log::trace!(
                "worker {id}: executing {:?} chunk [{begin}, {end})",
                task.tag()
            );
            // SAFETY: the submitter holds its buffers alive until the queue
            // drains, and chunk ranges are pairwise disjoint.
            unsafe { task.execute() };
        }
        queue.complete();
    }
    log::trace!("worker {id}: terminated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_terminates_without_deadlock() {
        let pool = ThreadPool::new(4).unwrap();
        assert_eq!(pool.worker_count(), 4);
        drop(pool);
    }

    #[test]
    fn test_explicit_shutdown_is_idempotent() {
        let mut pool = ThreadPool::new(2).unwrap();
        pool.shutdown();
        pool.shutdown();
        // Drop runs shutdown a third time.
    }

    #[test]
    fn test_unspecified_count_uses_platform_detection() {
        let pool = ThreadPool::new(0).unwrap();
        assert!(pool.worker_count() >= 1);
    }

    #[test]
    fn test_wait_drained_on_idle_pool() {
        let pool = ThreadPool::new(2).unwrap();
        pool.wait_drained();
    }
}
