//! Plain-text rendering of matrices.
//!
//! [`print_matrix_product`] lays out `A * B = C` as three blocks side by
//! side so the product can be checked by eye:
//!
//! ```text
//!   0   1     0   1     2   3
//!   2   3 *   2   3 =   6  11
//! ```
//!
//! The `write_*` forms take any [`Write`] and are what the tests use.

use std::io::{self, Write};

use crate::matrix::Matrix;

/// Blank cell, as wide as a `"{:3} "` value.
const BLANK_CELL: &str = "    ";

/// Print one matrix to stdout, one row per line, then a blank line.
pub fn print_matrix(m: &Matrix) -> io::Result<()> {
    write_matrix(&mut io::stdout().lock(), m)
}

/// Print `a * b = c` side by side to stdout. See [`write_matrix_product`].
pub fn print_matrix_product(a: &Matrix, b: &Matrix, c: &Matrix) -> io::Result<()> {
    write_matrix_product(&mut io::stdout().lock(), a, b, c)
}

/// Write one matrix, each value as `"{:4} "`, one row per line, followed
/// by a blank line.
pub fn write_matrix<W: Write>(out: &mut W, m: &Matrix) -> io::Result<()> {
    for i in 0..m.rows() {
        for value in m.row(i) {
            write!(out, "{:4} ", value)?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Write `a`, `b` and `c` as three blocks left to right.
///
/// The output has `max(rows)` lines plus a trailing blank line. Values are
/// `"{:3} "`; a block shorter than the tallest one is padded with blank
/// cells. Between the blocks sits a two-character marker slot that holds
/// `"* "` and `"= "` on the centre row (`max(rows) / 2`) and blanks
/// everywhere else.
///
/// Each block is sized by its own shape, so `c` need not be the product
/// of `a` and `b`.
pub fn write_matrix_product<W: Write>(
    out: &mut W,
    a: &Matrix,
    b: &Matrix,
    c: &Matrix,
) -> io::Result<()> {
    let max_rows = a.rows().max(b.rows()).max(c.rows());
    let center_row = max_rows / 2;

    for i in 0..max_rows {
        let on_center = i == center_row;

        write_block_row(out, a, i)?;
        out.write_all(if on_center { b"* " } else { b"  " })?;
        write_block_row(out, b, i)?;
        out.write_all(if on_center { b"= " } else { b"  " })?;
        write_block_row(out, c, i)?;
        writeln!(out)?;
    }
    writeln!(out)
}

fn write_block_row<W: Write>(out: &mut W, m: &Matrix, i: usize) -> io::Result<()> {
    if i < m.rows() {
        for value in m.row(i) {
            write!(out, "{:3} ", value)?;
        }
    } else {
        for _ in 0..m.cols() {
            out.write_all(BLANK_CELL.as_bytes())?;
        }
    }
    Ok(())
}
