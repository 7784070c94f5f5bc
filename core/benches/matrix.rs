use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndmatrix_core::prelude::*;

criterion_group!(matrix, set_benchmark, get_benchmark, chained_benchmark);
criterion_main!(matrix);

const COUNT: isize = 10_000;

fn diagonal_matrix() -> SparseMatrix<i32> {
    let mut m: SparseMatrix<i32> = SparseMatrix::with_capacity(-1, COUNT as usize);
    m.extend((0..COUNT).map(|i| (Pos2D::from([i, i]), i as i32)));
    m
}

fn set_benchmark(c: &mut Criterion) {
    c.bench_function("set_diagonal", |b| b.iter(diagonal_matrix));
    c.bench_function("set_then_elide", |b| {
        b.iter(|| {
            let mut m = diagonal_matrix();
            for i in 0..COUNT {
                m.set([i, i], -1);
            }
            assert!(m.is_empty());
        })
    });
}

fn get_benchmark(c: &mut Criterion) {
    let m = diagonal_matrix();
    c.bench_function("get_hit", |b| {
        b.iter(|| {
            for i in 0..COUNT {
                black_box(m.get([i, i]));
            }
        })
    });
    c.bench_function("get_miss", |b| {
        b.iter(|| {
            for i in 0..COUNT {
                black_box(m.get([i, i + 1]));
            }
        })
    });
}

fn chained_benchmark(c: &mut Criterion) {
    c.bench_function("chained_3d", |b| {
        b.iter(|| {
            let mut m = SparseMatrix::<i32, Dim3D>::new(0);
            for i in 0..COUNT {
                m.at_mut(i).at(-i).at(i).set(1);
            }
            black_box(m.len())
        })
    });
}
