/// Textbook matrix multiplication using i-j-k loop order.
///
/// One accumulator per output cell, summed over the inner dimension and
/// then stored, so `C = A * B` (C is overwritten, not accumulated into).
/// Arithmetic wraps on overflow in every build profile.
///
/// This is the reference order the [`Matrix`](super::Matrix) product uses.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
///
/// # Example
///
/// ```
/// use matprod::matmul_naive_ijk;
///
/// let a = [1, 2, 3, 4, 5, 6]; // 2×3
/// let b = [7, 8, 9, 10, 11, 12]; // 3×2
/// let mut c = [0; 4];
///
/// matmul_naive_ijk(&a, &b, &mut c, 2, 2, 3);
/// assert_eq!(c, [58, 64, 139, 154]);
/// ```
pub fn matmul_naive_ijk(a: &[i32], b: &[i32], c: &mut [i32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        for j in 0..n {
            let mut acc = 0i32;
            for p in 0..k {
                acc = acc.wrapping_add(a[i * k + p].wrapping_mul(b[p * n + j]));
            }
            c[i * n + j] = acc;
        }
    }
}
