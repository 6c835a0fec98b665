/// Matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops walks B and C row by row. The sums are the
/// same as [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk) because
/// wrapping integer addition is associative and commutative; only the
/// order of the additions differs.
///
/// Unlike the i-j-k kernel this one accumulates into C (C += A * B).
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn matmul_naive_ikj(a: &[i32], b: &[i32], c: &mut [i32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            for j in 0..n {
                c[i * n + j] = c[i * n + j].wrapping_add(a_ip.wrapping_mul(b[p * n + j]));
            }
        }
    }
}
