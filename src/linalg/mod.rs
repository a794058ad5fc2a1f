//! Numeric containers: flat `f32` buffers with a recorded shape.
//!
//! The executor consumes containers only through [`NumericBuffer`]: fallible
//! zero-initialized construction of a same-shape result, a length, and flat
//! slice access. Everything else ([`Vector`] math, [`Matrix`] element access)
//! is container-specific surface.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use crate::error::Result;

/// The container contract the executor requires: a contiguous `f32` buffer
/// whose length always equals the recorded length.
///
/// Aliasing views of a buffer are borrows (`as_slice`); ownership is never
/// shared, so freeing an owner and an alias of the same buffer is not
/// expressible.
pub trait NumericBuffer: Sized {
    /// Allocates a zero-initialized container of the same shape as `self`.
    fn like(&self) -> Result<Self>;

    /// The number of elements in the buffer.
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the flat element buffer.
    fn as_slice(&self) -> &[f32];

    /// Mutable view of the flat element buffer.
    fn as_mut_slice(&mut self) -> &mut [f32];
}
