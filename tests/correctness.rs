use matprod::cli::{Args, parse_int_lenient, write_error};
use matprod::matrix::transpose::transpose;
use matprod::{Matrix, MatrixError, matmul_naive_ijk, matmul_naive_ikj, multiply};

use clap::Parser;

/// Fixture used by the binary: A[i] = i (rows × cols).
fn fixture(rows: usize, cols: usize) -> Vec<i32> {
    (0..rows * cols).map(|i| i as i32).collect()
}

// ============================================================
// Fixed 5×4 * 4×5 product
// ============================================================

#[test]
fn test_fixed_product() {
    let a = Matrix::sequential(5, 4);
    let b = Matrix::sequential(4, 5);
    let c = multiply(&a, &b).unwrap();

    #[rustfmt::skip]
    let expected = vec![
         70,  76,  82,  88,  94,
        190, 212, 234, 256, 278,
        310, 348, 386, 424, 462,
        430, 484, 538, 592, 646,
        550, 620, 690, 760, 830,
    ];

    assert_eq!(c.shape(), (5, 5));
    assert_eq!(c.as_slice(), expected.as_slice());

    // C[0][0] = 0*0 + 1*5 + 2*10 + 3*15
    assert_eq!(c[(0, 0)], 70);
}

#[test]
fn test_product_does_not_alias_inputs() {
    let a = Matrix::sequential(5, 4);
    let b = Matrix::sequential(4, 5);
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = a.multiply(&b).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_2x3_times_3x2() {
    let a = Matrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let b = Matrix::new(3, 2, vec![7, 8, 9, 10, 11, 12]).unwrap();

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c.as_slice(), &[58, 64, 139, 154]);
}

// ============================================================
// Loop order independence (i-j-k vs i-k-j)
// ============================================================

#[test]
fn test_ijk_matches_ikj() {
    let test_sizes = [(1, 1, 1), (2, 2, 2), (5, 5, 4), (3, 5, 7), (7, 3, 5), (11, 13, 17)];

    for (m, n, k) in test_sizes {
        let a: Vec<i32> = (0..m * k).map(|i| (i % 10) as i32 - 4).collect();
        let b: Vec<i32> = (0..k * n).map(|i| (i % 7) as i32 - 3).collect();

        let mut c_ijk = vec![0; m * n];
        let mut c_ikj = vec![0; m * n];

        matmul_naive_ijk(&a, &b, &mut c_ijk, m, n, k);
        matmul_naive_ikj(&a, &b, &mut c_ikj, m, n, k);

        assert_eq!(c_ijk, c_ikj, "{}x{}x{}", m, n, k);
    }
}

#[test]
fn test_ijk_overwrites_ikj_accumulates() {
    let a = fixture(4, 4);
    let b = fixture(4, 4);

    let mut c_ijk = vec![5; 16];
    let mut c_ikj = vec![5; 16];

    matmul_naive_ijk(&a, &b, &mut c_ijk, 4, 4, 4);
    matmul_naive_ikj(&a, &b, &mut c_ikj, 4, 4, 4);

    for (x, y) in c_ijk.iter().zip(&c_ikj) {
        assert_eq!(x + 5, *y);
    }
}

#[test]
#[should_panic(expected = "A: expected")]
fn test_kernel_rejects_short_slice() {
    let mut c = vec![0; 4];
    matmul_naive_ijk(&[1, 2, 3], &[1, 2, 3, 4], &mut c, 2, 2, 2);
}

#[test]
fn test_overflow_wraps() {
    let a = Matrix::new(1, 2, vec![i32::MAX, 1]).unwrap();
    let b = Matrix::new(2, 1, vec![1, 1]).unwrap();

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c[(0, 0)], i32::MIN);
}

// ============================================================
// Dimension checks
// ============================================================

#[test]
fn test_dimension_mismatch() {
    let a = Matrix::sequential(5, 4);
    let b = Matrix::sequential(5, 4);

    let err = multiply(&a, &b).unwrap_err();

    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left_cols: 4,
            right_rows: 5
        }
    );
    assert!(err.to_string().contains("4 columns"));
}

#[test]
fn test_shape_mismatch() {
    let err = Matrix::new(2, 3, vec![1, 2, 3]).unwrap_err();

    assert_eq!(
        err,
        MatrixError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
}

#[test]
fn test_empty_inner_dimension() {
    let a = Matrix::zeros(2, 0);
    let b = Matrix::zeros(0, 3);

    let c = multiply(&a, &b).unwrap();

    assert_eq!(c, Matrix::zeros(2, 3));
}

// ============================================================
// Identity and transpose
// ============================================================

#[test]
fn test_identity_is_neutral() {
    let a = Matrix::sequential(5, 4);

    assert_eq!(multiply(&a, &Matrix::identity(4)).unwrap(), a);
    assert_eq!(multiply(&Matrix::identity(5), &a).unwrap(), a);
}

#[test]
fn test_transpose() {
    let a = Matrix::sequential(5, 4);
    let t = a.transpose();

    assert_eq!(t.shape(), (4, 5));
    for i in 0..5 {
        for j in 0..4 {
            assert_eq!(a[(i, j)], t[(j, i)]);
        }
    }
    assert_eq!(t.transpose(), a);
}

#[test]
fn test_transpose_slices() {
    let src = fixture(2, 3);
    let mut dst = vec![0; 6];

    transpose(&src, &mut dst, 2, 3);

    assert_eq!(dst, vec![0, 3, 1, 4, 2, 5]);
}

// ============================================================
// Accessors
// ============================================================

#[test]
fn test_accessors() {
    let m = Matrix::sequential(3, 4);

    assert_eq!(m.rows(), 3);
    assert_eq!(m.cols(), 4);
    assert_eq!(m.get(2, 3), Some(11));
    assert_eq!(m.get(3, 0), None);
    assert_eq!(m.get(0, 4), None);
    assert_eq!(m.row(1), &[4, 5, 6, 7]);
}

#[test]
#[should_panic(expected = "too large for sequential i32 values")]
fn test_sequential_rejects_oversized() {
    // 2^32 cells; rejected before anything is allocated
    let _ = Matrix::sequential(1 << 16, 1 << 16);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range() {
    let m = Matrix::sequential(2, 2);
    let _ = m[(0, 2)];
}

// ============================================================
// CLI
// ============================================================

#[test]
fn test_parse_int_lenient() {
    let cases = [
        ("42", 42),
        ("  17", 17),
        ("+8", 8),
        ("-12x", -12),
        ("3.9", 3),
        ("", 0),
        ("abc", 0),
        ("-", 0),
        ("99999999999999999999999", i64::MAX),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_int_lenient(input), expected, "{:?}", input);
    }
}

#[test]
fn test_args() {
    let args = Args::try_parse_from(["matprod"]).unwrap();
    assert_eq!(args.n(), 0);
    assert!(!args.stacked);

    let args = Args::try_parse_from(["matprod", "12", "--stacked"]).unwrap();
    assert_eq!(args.n(), 12);
    assert!(args.stacked);

    let args = Args::try_parse_from(["matprod", "nope"]).unwrap();
    assert_eq!(args.n(), 0);

    let args = Args::try_parse_from(["matprod", "-3"]).unwrap();
    assert_eq!(args.n(), -3);
}

#[test]
fn test_args_ignore_junk() {
    let args = Args::try_parse_from(["matprod", "-x"]).unwrap();
    assert_eq!(args.n(), 0);
    assert!(!args.stacked);

    let args = Args::try_parse_from(["matprod", "5", "extra"]).unwrap();
    assert_eq!(args.n(), 5);

    let args = Args::try_parse_from(["matprod", "--stacked", "7", "a", "-b", "--c"]).unwrap();
    assert_eq!(args.n(), 7);
    assert!(args.stacked);
}

#[test]
fn test_write_error() {
    let err = MatrixError::DimensionMismatch {
        left_cols: 4,
        right_rows: 5,
    };

    let mut out = Vec::new();
    write_error(&mut out, &err).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "error: dimension mismatch: left operand has 4 columns but right operand has 5 rows\n"
    );
}
