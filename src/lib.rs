//! Textbook integer matrix multiplication, printed side by side.
//!
//! Built as a teaching piece: the triple loop everyone learns first, on
//! owned row-major `i32` matrices, plus a printer that shows `A * B = C`
//! next to each other so the result can be checked by eye.
//!
//! ## Usage
//!
//! ```
//! use matprod::{multiply, Matrix};
//!
//! let a = Matrix::sequential(5, 4);
//! let b = Matrix::sequential(4, 5);
//! let c = multiply(&a, &b).unwrap();
//!
//! let mut out = Vec::new();
//! matprod::display::write_matrix_product(&mut out, &a, &b, &c).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 6);
//! ```
//!
//! Mismatched inner dimensions are an error, not undefined behaviour:
//!
//! ```
//! use matprod::{multiply, Matrix, MatrixError};
//!
//! let err = multiply(&Matrix::zeros(2, 3), &Matrix::zeros(2, 3)).unwrap_err();
//! assert_eq!(err, MatrixError::DimensionMismatch { left_cols: 3, right_rows: 2 });
//! ```
//!
//! ## What's inside
//!
//! - `Matrix`, with bounds-checked accessors
//! - i-j-k and i-k-j slice kernels (wrapping arithmetic)
//! - the side-by-side product printer

pub mod cli;
pub mod display;
pub mod error;
pub mod matrix;

pub use display::{print_matrix, print_matrix_product};
pub use error::{MatrixError, MatrixResult};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::{Matrix, multiply};
