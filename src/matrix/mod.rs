//! Owned integer matrices and the naive multiplication kernels behind them.
//!
//! [`Matrix`] wraps a flat row-major buffer with its shape so call sites
//! never do offset arithmetic themselves. The slice kernels in
//! [`naive_ijk`] and [`naive_ikj`] do the actual work.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod transpose;

use std::ops::Index;

use tracing::debug;

use crate::error::{MatrixError, MatrixResult};

/// A dense `rows × cols` matrix of `i32`, stored row-major.
///
/// Element `(row, col)` lives at linear index `row * cols + col`.
/// There are no mutators: a matrix is filled at construction and then
/// only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Build a matrix from a row-major buffer.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<i32>) -> MatrixResult<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> i32,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Matrix whose element at linear index `i` is `i`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix has more than `i32::MAX + 1` cells, since the
    /// last index would not fit in an `i32`.
    ///
    /// ```
    /// use matprod::Matrix;
    ///
    /// let m = Matrix::sequential(2, 3);
    /// assert_eq!(m.as_slice(), &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn sequential(rows: usize, cols: usize) -> Self {
        let cells = rows.checked_mul(cols);
        assert!(
            cells.is_some_and(|n| n <= i32::MAX as usize + 1),
            "{}x{} matrix is too large for sequential i32 values",
            rows,
            cols
        );
        Self::from_fn(rows, cols, |i, j| (i * cols + j) as i32)
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// The `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| i32::from(i == j))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Element at `(row, col)`, or `None` when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice of length `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[i32] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns a new `cols × rows` matrix.
    pub fn transpose(&self) -> Self {
        let mut data = vec![0; self.data.len()];
        transpose::transpose(&self.data, &mut data, self.rows, self.cols);
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `self * rhs`. See [`multiply`].
    pub fn multiply(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        multiply(self, rhs)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

/// Matrix product: C = A * B
///
/// A is m×k, B is k×n, the result is a new m×n matrix. Cells are summed
/// i-j-k with one accumulator each, wrapping on overflow.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// # Example
///
/// ```
/// use matprod::{multiply, Matrix};
///
/// let a = Matrix::sequential(5, 4);
/// let b = Matrix::sequential(4, 5);
/// let c = multiply(&a, &b).unwrap();
///
/// assert_eq!(c.shape(), (5, 5));
/// assert_eq!(c[(0, 0)], 70);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    if a.cols != b.rows {
        return Err(MatrixError::DimensionMismatch {
            left_cols: a.cols,
            right_rows: b.rows,
        });
    }

    let (m, k, n) = (a.rows, a.cols, b.cols);
    debug!(m, k, n, "multiplying matrices");

    let mut c = Matrix::zeros(m, n);
    naive_ijk::matmul_naive_ijk(&a.data, &b.data, &mut c.data, m, n, k);
    Ok(c)
}
