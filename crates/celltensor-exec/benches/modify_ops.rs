//! Benchmarks for celltensor-exec modify operations
//!
//! This benchmark suite measures performance of:
//! - Dense modify (copy of storage plus updates)
//! - Sparse modify (copy of the cell map plus updates)
//! - Update sets with mostly discarded cells

use celltensor_core::{Address, DenseTensor, TensorType};
use celltensor_exec::{modify, CellFunction, Tensor};
use celltensor_sparse::{CellValues, SparseTensor};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn dense_source(size: usize) -> Tensor {
    let ty = TensorType::dense(&[("x", size), ("y", size)]).unwrap();
    let values = (0..size * size).map(|i| i as f64).collect();
    Tensor::Dense(DenseTensor::from_vec(ty, values).unwrap())
}

fn sparse_source(size: usize) -> Tensor {
    let ty = TensorType::sparse(&["x", "y"]).unwrap();
    let cells = (0..size).flat_map(|x| {
        (0..size).map(move |y| (Address::new([x.to_string(), y.to_string()]), 1.0))
    });
    Tensor::Sparse(SparseTensor::from_cells(ty, cells).unwrap())
}

/// Grid of update cells every `stride` labels, extending `overshoot` rows past the source
fn update_set(size: usize, stride: usize, overshoot: usize) -> CellValues {
    let mut update = CellValues::new(["x", "y"]).unwrap();
    for x in (0..size + overshoot).step_by(stride) {
        for y in (0..size).step_by(stride) {
            update
                .insert(Address::new([x.to_string(), y.to_string()]), 2.0)
                .unwrap();
        }
    }
    update
}

/// Benchmark dense modify with a sparse update set
fn bench_dense_modify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_modify");

    for size in [32, 128, 512].iter() {
        let n = *size;
        let source = dense_source(n);
        let update = update_set(n, 4, 0);
        group.throughput(Throughput::Elements(update.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), size, |b, _| {
            b.iter(|| {
                let result = modify(black_box(&source), black_box(&update), CellFunction::Add.as_fn())
                    .unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark sparse modify with a sparse update set
fn bench_sparse_modify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_modify");

    for size in [32, 128].iter() {
        let n = *size;
        let source = sparse_source(n);
        let update = update_set(n, 4, 0);
        group.throughput(Throughput::Elements(update.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), size, |b, _| {
            b.iter(|| {
                let result =
                    modify(black_box(&source), black_box(&update), |_, new| new).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark update sets where half the cells fall outside the source
fn bench_discard_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("discard_heavy");

    let n = 128;
    let dense = dense_source(n);
    let sparse = sparse_source(n);
    let update = update_set(n, 2, n);

    group.bench_function("dense", |b| {
        b.iter(|| black_box(modify(&dense, black_box(&update), |_, new| new).unwrap()));
    });
    group.bench_function("sparse", |b| {
        b.iter(|| black_box(modify(&sparse, black_box(&update), |_, new| new).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dense_modify,
    bench_sparse_modify,
    bench_discard_heavy
);
criterion_main!(benches);
