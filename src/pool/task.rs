//! Task records consumed by the worker pool.
//!
//! A task references two source buffers (the second operand may instead be a
//! broadcast scalar), a shared result buffer, a half-open index range, and the
//! dispatch-resolved kernel to apply per element. Tasks carry raw pointers so
//! they can cross into long-lived worker threads without tying the pool to a
//! borrow lifetime; the submitting executor upholds the validity contract by
//! blocking on the queue drain before its buffers go out of scope.

use crate::numeric::{FloatKernel, NumericTag};

/// The second operand of a task: a buffer read at the same index as the first
/// operand, or a single scalar broadcast across the range.
#[derive(Debug, Clone, Copy)]
pub enum TaskOperand {
    Buffer(*const f32),
    Scalar(f32),
}

/// One contiguous chunk of an element-wise operation.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    a: *const f32,
    b: TaskOperand,
    result: *mut f32,
    begin: usize,
    end: usize,
    tag: NumericTag,
    kernel: FloatKernel,
}

// SAFETY: a task is only ever executed by one worker, operand buffers are
// read-only for the duration of the chunk, and the executor assigns disjoint
// `[begin, end)` write ranges over the shared result buffer.
unsafe impl Send for Task {}

impl Task {
    /// Builds a task over raw buffer pointers.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `a` (and `b`, when it is a buffer) is
    /// valid for reads and `result` is valid for writes at every index in
    /// `[begin, end)`, that the pointers stay valid until the owning queue
    /// reports the task complete, and that no other task writes any index in
    /// this task's range.
    pub unsafe fn new(
        a: *const f32,
        b: TaskOperand,
        result: *mut f32,
        begin: usize,
        end: usize,
        tag: NumericTag,
        kernel: FloatKernel,
    ) -> Self {
        Task {
            a,
            b,
            result,
            begin,
            end,
            tag,
            kernel,
        }
    }

    /// The half-open index range this task covers.
    pub fn range(&self) -> (usize, usize) {
        (self.begin, self.end)
    }

    /// The numeric type tag the task was dispatched for.
    pub fn tag(&self) -> NumericTag {
        self.tag
    }

    /// Whether the range covers no indices.
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    /// Applies the kernel to every index in `[begin, end)`, writing into the
    /// result buffer.
    ///
    /// # Safety
    ///
    /// Relies on the pointer-validity contract of [`Task::new`].
    pub(crate) unsafe fn execute(&self) {
        for i in self.begin..self.end {
            let x = *self.a.add(i);
            let y = match self.b {
                TaskOperand::Buffer(b) => *b.add(i),
                TaskOperand::Scalar(value) => value,
            };
            *self.result.add(i) = (self.kernel)(x, y);
        }
    }
}
