//! Benchmarks for the matrix utilities.
//!
//! Covers the batched Cholesky paths and the interpolation helpers at the
//! batch sizes a training loop typically feeds them.
//!
//! Run with:
//! ```bash
//! cargo bench --bench matrix_utils
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mprl_core::DenseND;
use mprl_util::{
    add_expand_dim, build_lower_matrix, get_sub_tensor, indexing_interpolate, num_off_diag,
    tensor_linspace, to_cholesky, transform_to_cholesky, AxisSelector, LinspaceBound,
};
use std::hint::black_box;

fn filled(shape: &[usize]) -> DenseND<f64> {
    let n: usize = shape.iter().product();
    DenseND::from_vec((0..n).map(|i| ((i % 13) as f64) / 13.0 - 0.5).collect(), shape)
        .expect("shape matches data length")
}

/// Batch of diagonally dominant `n x n` covariances
fn covariances(batch: usize, n: usize) -> DenseND<f64> {
    let mut data = Vec::with_capacity(batch * n * n);
    for _ in 0..batch {
        for r in 0..n {
            for c in 0..n {
                data.push(if r == c { n as f64 } else { 0.5 });
            }
        }
    }
    DenseND::from_vec(data, &[batch, n, n]).expect("shape matches data length")
}

/// Benchmark assembling `L` from parameter vectors
fn bench_build_lower_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_lower_matrix");

    for &(batch, dim) in &[(1, 8), (64, 8), (256, 16), (1024, 4)] {
        let diag = filled(&[batch, dim]);
        let off = filled(&[batch, num_off_diag(dim)]);
        group.throughput(Throughput::Elements((batch * dim * dim) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", batch, dim)),
            &(diag, off),
            |b, (diag, off)| {
                b.iter(|| black_box(build_lower_matrix(black_box(diag), Some(off)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark the unconstrained-to-Cholesky transform
fn bench_transform_to_cholesky(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_to_cholesky");

    for &(batch, dim) in &[(64, 8), (256, 16)] {
        let mat = filled(&[batch, dim, dim]);
        group.throughput(Throughput::Elements((batch * dim * dim) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", batch, dim)),
            &mat,
            |b, mat| {
                b.iter(|| black_box(transform_to_cholesky(black_box(mat)).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark factorizing covariance matrices
fn bench_to_cholesky_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_cholesky_covariance");

    for &(batch, dim) in &[(1, 32), (64, 8), (256, 16)] {
        let cov = covariances(batch, dim);
        group.throughput(Throughput::Elements((batch * dim * dim) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", batch, dim)),
            &cov,
            |b, cov| {
                b.iter(|| black_box(to_cholesky(None, None, None, Some(black_box(cov))).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark vectorized linspace followed by fractional indexing
fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");

    let start = filled(&[64, 7]);
    let end = DenseND::<f64>::ones(&[64, 7]);
    group.bench_function("tensor_linspace_64x7x100", |b| {
        b.iter(|| {
            black_box(
                tensor_linspace(
                    LinspaceBound::Tensor(black_box(&start)),
                    LinspaceBound::Tensor(&end),
                    100,
                )
                .unwrap(),
            )
        });
    });

    let data = filled(&[200, 7]);
    let idx = tensor_linspace(LinspaceBound::Scalar(0.0), LinspaceBound::Scalar(199.0), 1000)
        .unwrap()
        .reshape(&[10, 100])
        .unwrap();
    group.bench_function("indexing_interpolate_10x100x7", |b| {
        b.iter(|| black_box(indexing_interpolate(black_box(&data), &idx).unwrap()));
    });

    group.finish();
}

/// Benchmark broadcasting and slicing helpers
fn bench_expand_and_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_and_slice");

    let v = filled(&[64, 16]);
    group.bench_function("add_expand_dim_64x16_to_64x10x16", |b| {
        b.iter(|| black_box(add_expand_dim(black_box(v.clone()), &[1], &[10]).unwrap()));
    });

    let t = filled(&[32, 64, 16]);
    let selectors = [
        AxisSelector::range(0, Some(16)),
        AxisSelector::Index(-1),
    ];
    group.bench_function("get_sub_tensor_32x64x16", |b| {
        b.iter(|| black_box(get_sub_tensor(black_box(&t), &[0, 2], &selectors).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_lower_matrix,
    bench_transform_to_cholesky,
    bench_to_cholesky_factorization,
    bench_interpolation,
    bench_expand_and_slice
);
criterion_main!(benches);
