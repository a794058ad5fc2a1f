//! Numeric type tags and 32-bit scalar value representations.
//!
//! The runtime supports exactly two scalar kinds, both 4 bytes wide: IEEE-754
//! 32-bit floats and 32-bit signed integers. [`NumericValue`] carries either
//! interpretation; [`encode_f32`] and [`decode_f32`] reinterpret the same
//! 4-byte storage at the bit level. Container elements are always floats;
//! the integer side exists for the scalar dispatch layer only.

use crate::error::{ChunklyError, Result};

/// Identifies which concrete numeric type an operation applies to.
///
/// The set is sealed: extending the runtime to a new scalar kind means adding
/// a variant here and satisfying the exhaustive matches the compiler then
/// demands. Raw tag codes (e.g. from configuration) enter through
/// [`NumericTag::from_code`], which rejects anything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericTag {
    /// IEEE-754 32-bit precision.
    F32,
    /// 32-bit integer precision.
    I32,
}

impl NumericTag {
    /// Resolves a raw tag code.
    ///
    /// Returns [`ChunklyError::UnsupportedType`] for any code outside the
    /// registered set, without performing any computation.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(NumericTag::F32),
            1 => Ok(NumericTag::I32),
            _ => Err(ChunklyError::UnsupportedType { code }),
        }
    }

    /// The raw code for this tag.
    pub fn code(self) -> u32 {
        match self {
            NumericTag::F32 => 0,
            NumericTag::I32 => 1,
        }
    }
}

/// A tagged 32-bit scalar: either interpretation of the same 4-byte storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// A 32-bit float.
    F32(f32),
    /// A 32-bit signed integer.
    I32(i32),
}

impl NumericValue {
    /// The tag identifying this value's concrete type.
    pub fn tag(self) -> NumericTag {
        match self {
            NumericValue::F32(_) => NumericTag::F32,
            NumericValue::I32(_) => NumericTag::I32,
        }
    }

    /// Reinterprets this value's 4 bytes as an integer bit pattern.
    pub fn bits(self) -> i32 {
        match self {
            NumericValue::F32(value) => encode_f32(value),
            NumericValue::I32(bits) => bits,
        }
    }
}

/// Encodes a float into its raw 32-bit integer bit representation.
pub fn encode_f32(value: f32) -> i32 {
    value.to_bits() as i32
}

/// Decodes a raw 32-bit integer bit representation back into a float.
pub fn decode_f32(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}
