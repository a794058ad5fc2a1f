//! N-dimensional vectors over a contiguous `f32` buffer.
//!
//! Covers creation, copying, common operations (magnitude, distance, mean,
//! normalization, scaling, clipping), special operations (dot and cross
//! products), and conversion between polar and cartesian coordinates.

use std::ops::{Index, IndexMut};

use ndarray::Array1;

use crate::error::{allocation_failure, dimension_mismatch, ChunklyError, Result};
use crate::linalg::NumericBuffer;

/// An N-dimensional vector owning a contiguous, heap-allocated float buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Creates a zero-initialized vector with `columns` elements.
    ///
    /// Allocation failure is reported as
    /// [`ChunklyError::AllocationFailure`], not a process abort.
    pub fn new(columns: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(columns)
            .map_err(|error| allocation_failure(columns, error.to_string()))?;
        data.resize(columns, 0.0);
        Ok(Vector { data })
    }

    /// Creates a vector by copying a slice.
    pub fn from_slice(values: &[f32]) -> Self {
        Vector {
            data: values.to_vec(),
        }
    }

    /// The number of elements (dimensions).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the element buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of the element buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// The magnitude (Euclidean length) of the vector.
    pub fn magnitude(&self) -> f32 {
        let sum: f32 = self.data.iter().map(|x| x * x).sum();
        sum.sqrt()
    }

    /// The Euclidean distance between two vectors of the same dimension.
    pub fn distance(&self, other: &Vector) -> Result<f32> {
        if self.len() != other.len() {
            return Err(dimension_mismatch(
                self.len(),
                other.len(),
                "distance requires operands of the same dimension",
            ));
        }

        let squared: f32 = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok(squared.sqrt())
    }

    /// The arithmetic mean of the elements.
    ///
    /// Returns NaN for an empty vector, and NaN when any element is NaN: a
    /// NaN element marks a failed upstream computation and must propagate,
    /// never average away.
    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return f32::NAN;
        }

        let mut sum = 0.0f32;
        for (i, &value) in self.data.iter().enumerate() {
            if value.is_nan() {
                log::error!("NaN element found at index {}.", i);
                return f32::NAN;
            }
            sum += value;
        }
        sum / self.data.len() as f32
    }

    /// Returns the unit vector pointing in this vector's direction.
    ///
    /// A zero-magnitude vector cannot be normalized and fails with
    /// [`ChunklyError::ZeroMagnitude`].
    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::error!("Cannot normalize a zero-length vector.");
            return Err(ChunklyError::ZeroMagnitude);
        }

        let mut unit = self.like()?;
        for (out, &value) in unit.data.iter_mut().zip(&self.data) {
            *out = value / magnitude;
        }
        Ok(unit)
    }

    /// Normalizes the vector in place.
    pub fn normalize_in_place(&mut self) -> Result<()> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::error!("Cannot normalize a zero-length vector.");
            return Err(ChunklyError::ZeroMagnitude);
        }

        for value in &mut self.data {
            *value /= magnitude;
        }
        Ok(())
    }

    /// Returns a copy scaled by `factor`.
    pub fn scale(&self, factor: f32) -> Result<Vector> {
        let mut scaled = self.like()?;
        for (out, &value) in scaled.data.iter_mut().zip(&self.data) {
            *out = value * factor;
        }
        Ok(scaled)
    }

    /// Scales the vector in place by `factor`.
    pub fn scale_in_place(&mut self, factor: f32) {
        for value in &mut self.data {
            *value *= factor;
        }
    }

    /// Returns a copy with every element clamped to `[min, max]`.
    pub fn clip(&self, min: f32, max: f32) -> Result<Vector> {
        let mut clipped = self.like()?;
        for (out, &value) in clipped.data.iter_mut().zip(&self.data) {
            *out = value.clamp(min, max);
        }
        Ok(clipped)
    }

    /// Clamps every element to `[min, max]` in place.
    pub fn clip_in_place(&mut self, min: f32, max: f32) {
        for value in &mut self.data {
            *value = value.clamp(min, max);
        }
    }

    /// The dot product of two vectors of the same dimension.
    pub fn dot(&self, other: &Vector) -> Result<f32> {
        if self.len() != other.len() {
            return Err(dimension_mismatch(
                self.len(),
                other.len(),
                "dot product requires operands of the same dimension",
            ));
        }

        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// The cross product of two 3-dimensional vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.len() != 3 || other.len() != 3 {
            log::error!("Cross product is only defined for 3-dimensional vectors.");
            return Err(dimension_mismatch(
                self.len(),
                other.len(),
                "cross product is only defined for 3-dimensional vectors",
            ));
        }

        let a = &self.data;
        let b = &other.data;
        let mut result = Vector::new(3)?;
        result.data[0] = a[1] * b[2] - a[2] * b[1];
        result.data[1] = a[2] * b[0] - a[0] * b[2];
        result.data[2] = a[0] * b[1] - a[1] * b[0];
        Ok(result)
    }

    /// Converts a 2-D polar `(r, θ)` vector to cartesian `(x, y)`.
    ///
    /// `x = r cos θ`, `y = r sin θ`.
    pub fn polar_to_cartesian(&self) -> Result<Vector> {
        if self.len() != 2 {
            return Err(dimension_mismatch(
                self.len(),
                2,
                "polar coordinates are an ordered pair (r, θ)",
            ));
        }

        let r = self.data[0];
        let theta = self.data[1];

        let mut cartesian = Vector::new(2)?;
        cartesian.data[0] = r * theta.cos();
        cartesian.data[1] = r * theta.sin();
        Ok(cartesian)
    }

    /// Converts a 2-D cartesian `(x, y)` vector to polar `(r, θ)`.
    ///
    /// `r = √(x² + y²)`, `θ = atan2(y, x)`.
    pub fn cartesian_to_polar(&self) -> Result<Vector> {
        if self.len() != 2 {
            return Err(dimension_mismatch(
                self.len(),
                2,
                "cartesian coordinates are an ordered pair (x, y)",
            ));
        }

        let x = self.data[0];
        let y = self.data[1];

        let mut polar = Vector::new(2)?;
        polar.data[0] = (x * x + y * y).sqrt();
        polar.data[1] = y.atan2(x);
        Ok(polar)
    }
}

impl NumericBuffer for Vector {
    fn like(&self) -> Result<Self> {
        Vector::new(self.len())
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

impl Index<usize> for Vector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl From<Array1<f32>> for Vector {
    fn from(array: Array1<f32>) -> Self {
        Vector {
            data: array.to_vec(),
        }
    }
}

impl From<Vector> for Array1<f32> {
    fn from(vector: Vector) -> Self {
        Array1::from_vec(vector.data)
    }
}
