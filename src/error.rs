//! Error types for chunkly operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.

use std::fmt;

/// Errors that can occur during chunkly operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunklyError {
    /// Memory allocation for a container or pool structure failed.
    AllocationFailure {
        /// The number of elements that was requested.
        requested_len: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Two operands do not have the same length.
    DimensionMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A numeric type tag outside the registered set was supplied.
    UnsupportedType {
        /// The raw tag code that failed to resolve.
        code: u32,
    },
    /// An arithmetic kind outside the registered set was supplied.
    UnsupportedOperation {
        /// The raw kind code that failed to resolve.
        code: u32,
    },
    /// Integer division by zero. The float path yields a quiet NaN instead.
    DivisionByZero {
        /// The numerator of the failed division.
        numerator: i32,
    },
    /// A worker thread could not be started during pool construction.
    ThreadStart {
        /// Human-readable error message.
        message: String,
    },
    /// A zero-magnitude vector cannot be normalized.
    ZeroMagnitude,
}

impl fmt::Display for ChunklyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunklyError::AllocationFailure {
                requested_len,
                message,
            } => write!(
                f,
                "Memory allocation failed: {} (requested {} elements)",
                message, requested_len
            ),
            ChunklyError::DimensionMismatch {
                left,
                right,
                message,
            } => write!(
                f,
                "Dimension mismatch: {} (left: {}, right: {})",
                message, left, right
            ),
            ChunklyError::UnsupportedType { code } => {
                write!(f, "Unsupported numeric type tag: {}", code)
            }
            ChunklyError::UnsupportedOperation { code } => {
                write!(f, "Unsupported arithmetic operation: {}", code)
            }
            ChunklyError::DivisionByZero { numerator } => write!(
                f,
                "Division by zero is undefined: cannot divide {} by 0",
                numerator
            ),
            ChunklyError::ThreadStart { message } => {
                write!(f, "Failed to start worker thread: {}", message)
            }
            ChunklyError::ZeroMagnitude => {
                write!(f, "Cannot normalize a zero-length vector")
            }
        }
    }
}

impl std::error::Error for ChunklyError {}

/// Result type alias for chunkly operations.
pub type Result<T> = std::result::Result<T, ChunklyError>;

/// Creates an allocation error.
pub fn allocation_failure(requested_len: usize, message: impl Into<String>) -> ChunklyError {
    ChunklyError::AllocationFailure {
        requested_len,
        message: message.into(),
    }
}

/// Creates a dimension mismatch error.
pub fn dimension_mismatch(left: usize, right: usize, message: impl Into<String>) -> ChunklyError {
    ChunklyError::DimensionMismatch {
        left,
        right,
        message: message.into(),
    }
}

/// Creates a thread start error.
pub fn thread_start(message: impl Into<String>) -> ChunklyError {
    ChunklyError::ThreadStart {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failure_display() {
        let error = allocation_failure(1024, "out of memory");
        let display = format!("{}", error);
        assert!(display.contains("Memory allocation failed"));
        assert!(display.contains("1024 elements"));
        assert!(display.contains("out of memory"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = dimension_mismatch(8, 5, "operands must have the same length");
        let display = format!("{}", error);
        assert!(display.contains("Dimension mismatch"));
        assert!(display.contains("left: 8"));
        assert!(display.contains("right: 5"));
        assert!(display.contains("operands must have the same length"));
    }

    #[test]
    fn test_unsupported_type_display() {
        let error = ChunklyError::UnsupportedType { code: 7 };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported numeric type tag: 7"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let error = ChunklyError::DivisionByZero { numerator: 10 };
        let display = format!("{}", error);
        assert!(display.contains("cannot divide 10 by 0"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = allocation_failure(1024, "test");
        let error2 = allocation_failure(1024, "test");
        let error3 = allocation_failure(2048, "test");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = thread_start("test error");

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        // Should have source method (returns None for our simple errors)
        assert!(std::error::Error::source(&error).is_none());
    }
}
