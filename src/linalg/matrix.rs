//! Matrices with dynamic dimensions over a flat row-major `f32` buffer.

use ndarray::Array2;

use crate::error::{allocation_failure, dimension_mismatch, Result};
use crate::linalg::NumericBuffer;

/// A `rows × cols` matrix storing its elements in a flat row-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-initialized `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let count = rows
            .checked_mul(cols)
            .ok_or_else(|| allocation_failure(usize::MAX, "element count overflows usize"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|error| allocation_failure(count, error.to_string()))?;
        data.resize(count, 0.0);

        Ok(Matrix { data, rows, cols })
    }

    /// Builds a matrix from a flat row-major buffer.
    ///
    /// Fails with `DimensionMismatch` when the buffer length does not equal
    /// `rows * cols`.
    pub fn from_parts(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(dimension_mismatch(
                data.len(),
                rows * cols,
                "buffer length must equal rows * cols",
            ));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The total number of elements.
    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    /// The element at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Sets the element at `(row, column)`. Returns `false` when out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.data[row * self.cols + col] = value;
        true
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether every element is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Read-only view of the flat row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of the flat row-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl NumericBuffer for Matrix {
    fn like(&self) -> Result<Self> {
        Matrix::new(self.rows, self.cols)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl From<Array2<f32>> for Matrix {
    fn from(array: Array2<f32>) -> Self {
        let rows = array.nrows();
        let cols = array.ncols();
        // A standard-layout Array2 is already row-major; iteration covers the
        // non-contiguous case too.
        let data = array.iter().copied().collect();
        Matrix { data, rows, cols }
    }
}

impl From<Matrix> for Array2<f32> {
    fn from(matrix: Matrix) -> Self {
        Array2::from_shape_vec((matrix.rows, matrix.cols), matrix.data)
            .expect("row-major buffer length equals rows * cols")
    }
}
