//! Compares the i-j-k and i-k-j kernels and the `Matrix` product.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matprod::{Matrix, matmul_naive_ijk, matmul_naive_ikj, multiply};

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    for size in [16usize, 64, 128] {
        let a: Vec<i32> = (0..size * size).map(|i| (i % 100) as i32).collect();
        let b: Vec<i32> = (0..size * size).map(|i| (i % 100) as i32).collect();

        group.bench_with_input(BenchmarkId::new("ijk", size), &size, |bench, &n| {
            let mut out = vec![0; n * n];
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n, n, n));
        });

        group.bench_with_input(BenchmarkId::new("ikj", size), &size, |bench, &n| {
            bench.iter_batched(
                || vec![0; n * n],
                |mut out| {
                    matmul_naive_ikj(black_box(&a), black_box(&b), &mut out, n, n, n);
                    out
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_fixed_product(c: &mut Criterion) {
    let a = Matrix::sequential(5, 4);
    let b = Matrix::sequential(4, 5);

    c.bench_function("fixed 5x4 * 4x5", |bench| {
        bench.iter(|| multiply(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_kernels, bench_fixed_product);
criterion_main!(benches);
