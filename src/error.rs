//! Error types for matrix construction and multiplication.

use thiserror::Error;

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors that can occur while building or multiplying matrices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Inner dimensions disagree: columns of the left operand must equal
    /// rows of the right operand.
    #[error("dimension mismatch: left operand has {left_cols} columns but right operand has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// Buffer length does not match the declared shape.
    #[error("shape mismatch: {rows}x{cols} matrix cannot hold {len} elements")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}
