//! The scalar dispatch table.
//!
//! Maps an arithmetic kind and a numeric type tag to the concrete two-operand
//! operation for that type. The table is built from exhaustive matches over
//! sealed enums, so every `(kind, tag)` pair in the registered set resolves at
//! compile time and shares no mutable state, making it safe to use from any
//! thread.
//!
//! Division is the one kind with failure semantics: the float kernel yields a
//! quiet NaN on a zero divisor (recoverable; downstream aggregates must treat
//! NaN as "computation failed"), while the integer kernel returns an explicit
//! [`ChunklyError::DivisionByZero`] and writes nothing.

use num::Float;

use crate::error::{ChunklyError, Result};
use crate::numeric::types::{NumericTag, NumericValue};

/// A two-operand float operation. Does not allocate.
pub type FloatKernel = fn(f32, f32) -> f32;

/// A two-operand integer operation. Does not allocate.
///
/// Fallible uniformly so the dispatch table has one integer signature;
/// only division actually fails.
pub type IntKernel = fn(i32, i32) -> Result<i32>;

/// The arithmetic kinds the dispatch table registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticKind {
    /// Resolves a raw kind code.
    ///
    /// Returns [`ChunklyError::UnsupportedOperation`] for any code outside the
    /// registered set.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(ArithmeticKind::Add),
            1 => Ok(ArithmeticKind::Subtract),
            2 => Ok(ArithmeticKind::Multiply),
            3 => Ok(ArithmeticKind::Divide),
            _ => Err(ChunklyError::UnsupportedOperation { code }),
        }
    }

    /// The raw code for this kind.
    pub fn code(self) -> u32 {
        match self {
            ArithmeticKind::Add => 0,
            ArithmeticKind::Subtract => 1,
            ArithmeticKind::Multiply => 2,
            ArithmeticKind::Divide => 3,
        }
    }
}

/// A dispatch-resolved concrete operation for one numeric type.
#[derive(Debug, Clone, Copy)]
pub enum ScalarOp {
    F32(FloatKernel),
    I32(IntKernel),
}

impl ScalarOp {
    /// Applies the operation to two tagged values of the operation's type.
    ///
    /// Operands whose tags do not match the resolved operation fail with
    /// [`ChunklyError::UnsupportedType`] and no computation is performed.
    pub fn apply(self, a: NumericValue, b: NumericValue) -> Result<NumericValue> {
        match (self, a, b) {
            (ScalarOp::F32(kernel), NumericValue::F32(x), NumericValue::F32(y)) => {
                Ok(NumericValue::F32(kernel(x, y)))
            }
            (ScalarOp::I32(kernel), NumericValue::I32(x), NumericValue::I32(y)) => {
                Ok(NumericValue::I32(kernel(x, y)?))
            }
            (_, a, _) => Err(ChunklyError::UnsupportedType { code: a.tag().code() }),
        }
    }
}

fn add_f32(x: f32, y: f32) -> f32 {
    x + y
}

fn subtract_f32(x: f32, y: f32) -> f32 {
    x - y
}

fn multiply_f32(x: f32, y: f32) -> f32 {
    x * y
}

fn divide_f32(x: f32, y: f32) -> f32 {
    if y == 0.0 {
        log::error!(
            "Division by zero is undefined. Cannot divide x ({}) by y ({}).",
            x,
            y
        );
        return Float::nan();
    }
    x / y
}

fn add_i32(x: i32, y: i32) -> Result<i32> {
    Ok(x.wrapping_add(y))
}

fn subtract_i32(x: i32, y: i32) -> Result<i32> {
    Ok(x.wrapping_sub(y))
}

fn multiply_i32(x: i32, y: i32) -> Result<i32> {
    Ok(x.wrapping_mul(y))
}

fn divide_i32(x: i32, y: i32) -> Result<i32> {
    if y == 0 {
        log::error!(
            "Division by zero is undefined. Cannot divide x ({}) by y (0).",
            x
        );
        return Err(ChunklyError::DivisionByZero { numerator: x });
    }
    Ok(x.wrapping_div(y))
}

/// Returns the concrete operation for a registered `(kind, tag)` pair.
///
/// Infallible on the sealed enums: every registered pair has a row in the
/// table. Raw codes go through [`dispatch_codes`] instead.
pub fn dispatch(kind: ArithmeticKind, tag: NumericTag) -> ScalarOp {
    match tag {
        NumericTag::F32 => ScalarOp::F32(float_kernel(kind)),
        NumericTag::I32 => ScalarOp::I32(match kind {
            ArithmeticKind::Add => add_i32,
            ArithmeticKind::Subtract => subtract_i32,
            ArithmeticKind::Multiply => multiply_i32,
            ArithmeticKind::Divide => divide_i32,
        }),
    }
}

/// Resolves raw kind and tag codes, then dispatches.
///
/// Fails with [`ChunklyError::UnsupportedOperation`] or
/// [`ChunklyError::UnsupportedType`] before touching the table; no memory is
/// written on the failure path.
pub fn dispatch_codes(kind_code: u32, tag_code: u32) -> Result<ScalarOp> {
    let kind = ArithmeticKind::from_code(kind_code)?;
    let tag = NumericTag::from_code(tag_code)?;
    Ok(dispatch(kind, tag))
}

/// The float kernel for a kind. Container buffers always hold floats.
pub fn float_kernel(kind: ArithmeticKind) -> FloatKernel {
    match kind {
        ArithmeticKind::Add => add_f32,
        ArithmeticKind::Subtract => subtract_f32,
        ArithmeticKind::Multiply => multiply_f32,
        ArithmeticKind::Divide => divide_f32,
    }
}
