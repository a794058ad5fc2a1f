//! Numeric type tags, tagged scalar values, and the arithmetic dispatch table.

pub mod dispatch;
pub mod types;

pub use dispatch::{dispatch, dispatch_codes, float_kernel, ArithmeticKind, FloatKernel, IntKernel, ScalarOp};
pub use types::{decode_f32, encode_f32, NumericTag, NumericValue};
