//! Bounded task queue: a fixed-capacity ring buffer with completion tracking.
//!
//! The queue decouples task producers (the executor) from consumers (worker
//! threads). One mutex guards the ring storage, the head/tail indices, the
//! occupancy and live counts, and the stop flag; three condition variables
//! signal "has work" (consumers), "slot free" (blocked producers), and "fully
//! drained" (the submitter waiting for its burst to complete).
//!
//! Submission on a full ring blocks the producer until a worker frees a slot.
//! The owning pool sizes the ring to the worker count, so one executor burst
//! (one task per chunk) never blocks in the common case.

use std::sync::{Condvar, Mutex, MutexGuard};

use crate::pool::task::Task;

struct RingState {
    slots: Box<[Option<Task>]>,
    head: usize,
    tail: usize,
    /// Tasks currently stored in the ring.
    len: usize,
    /// Tasks submitted but not yet completed (stored or executing).
    live: usize,
    stop: bool,
}

/// A fixed-capacity, mutex-guarded ring buffer of [`Task`] records.
pub struct TaskQueue {
    state: Mutex<RingState>,
    has_work: Condvar,
    slot_free: Condvar,
    drained: Condvar,
}

impl TaskQueue {
    /// Creates a queue holding at most `capacity` tasks (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let slots = std::iter::repeat_with(|| None)
            .take(capacity)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        TaskQueue {
            state: Mutex::new(RingState {
                slots,
                head: 0,
                tail: 0,
                len: 0,
                live: 0,
                stop: false,
            }),
            has_work: Condvar::new(),
            slot_free: Condvar::new(),
            drained: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RingState> {
        // Workers never panic while holding the lock; poisoning would mean a
        // bug in the queue itself.
        self.state.lock().expect("task queue mutex poisoned")
    }

    /// The fixed slot count.
    pub fn capacity(&self) -> usize {
        self.lock().slots.len()
    }

    /// Tasks currently stored in the ring.
    pub fn len(&self) -> usize {
        self.lock().len
    }

    /// Whether the ring currently stores no tasks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a task at the tail and signals "has work".
    ///
    /// Blocks while the ring is at capacity. After [`TaskQueue::close`] the
    /// task is dropped and a warning is logged; nothing will consume it.
    pub fn submit(&self, task: Task) {
        let mut state = self.lock();
        while state.len == state.slots.len() && !state.stop {
            state = self
                .slot_free
                .wait(state)
                .expect("task queue mutex poisoned");
        }
        if state.stop {
            log::warn!("task submitted to a closed queue; dropping it");
            return;
        }

        let tail = state.tail;
        state.slots[tail] = Some(task);
        state.tail = (tail + 1) % state.slots.len();
        state.len += 1;
        state.live += 1;
        self.has_work.notify_one();
    }

    /// Removes the task at the head, blocking while the ring is empty.
    ///
    /// Returns `None` once the queue is closed and empty, the "no more work"
    /// signal that terminates a worker.
    pub fn pop(&self) -> Option<Task> {
        let mut state = self.lock();
        loop {
            if state.len > 0 {
                let head = state.head;
                let task = state.slots[head].take();
                state.head = (head + 1) % state.slots.len();
                state.len -= 1;
                self.slot_free.notify_one();
                return task;
            }
            if state.stop {
                return None;
            }
            state = self
                .has_work
                .wait(state)
                .expect("task queue mutex poisoned");
        }
    }

    /// Records that a popped task has finished executing.
    ///
    /// The live count transition to zero signals "drained" exactly once per
    /// drain cycle.
    pub fn complete(&self) {
        let mut state = self.lock();
        debug_assert!(state.live > 0, "complete() without a live task");
        state.live -= 1;
        if state.live == 0 {
            self.drained.notify_all();
        }
    }

    /// Blocks the calling thread until every submitted task has completed.
    pub fn wait_drained(&self) {
        let mut state = self.lock();
        while state.live > 0 {
            state = self
                .drained
                .wait(state)
                .expect("task queue mutex poisoned");
        }
    }

    /// Transitions the queue to shutting-down and wakes every waiter.
    ///
    /// Blocked consumers observe stop-and-empty and terminate; blocked
    /// producers give up their submission.
    pub fn close(&self) {
        let mut state = self.lock();
        state.stop = true;
        self.has_work.notify_all();
        self.slot_free.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{float_kernel, ArithmeticKind, NumericTag};
    use crate::pool::task::TaskOperand;

    // A task that is never executed; only the queue bookkeeping is exercised.
    fn marker_task(begin: usize, end: usize) -> Task {
        unsafe {
            Task::new(
                std::ptr::null(),
                TaskOperand::Scalar(0.0),
                std::ptr::null_mut(),
                begin,
                end,
                NumericTag::F32,
                float_kernel(ArithmeticKind::Add),
            )
        }
    }

    #[test]
    fn test_fifo_order_and_wraparound() {
        let queue = TaskQueue::with_capacity(2);

        for round in 0..3 {
            queue.submit(marker_task(round, round + 1));
            queue.submit(marker_task(round + 10, round + 11));
            let first = queue.pop().unwrap();
            let second = queue.pop().unwrap();
            assert_eq!(first.range(), (round, round + 1));
            assert_eq!(second.range(), (round + 10, round + 11));
            queue.complete();
            queue.complete();
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let queue = TaskQueue::with_capacity(4);
        for i in 0..4 {
            queue.submit(marker_task(i, i + 1));
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn test_pop_returns_none_on_closed_empty_queue() {
        let queue = TaskQueue::with_capacity(1);
        queue.close();
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_close_drains_stored_tasks_first() {
        let queue = TaskQueue::with_capacity(2);
        queue.submit(marker_task(0, 1));
        queue.close();
        // Stored work is still handed out before the "no more work" signal.
        assert!(queue.pop().is_some());
        queue.complete();
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_wait_drained_returns_immediately_when_idle() {
        let queue = TaskQueue::with_capacity(1);
        queue.wait_drained();
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let queue = TaskQueue::with_capacity(0);
        assert_eq!(queue.capacity(), 1);
    }
}
