use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix::Matrix;

pub fn prod_into(c: &mut Criterion) {
    let n = 30;
    let this = black_box(Matrix::new(1.23123, n, n));
    let other = black_box(Matrix::new(1.23123, n, n));
    let mut into = black_box(Matrix::new(1.23123, n, n));

    c.bench_function("prod_into", |b| {
        b.iter(|| this.prod_into(&other, &mut into))
    });
}

pub fn prod_vector(c: &mut Criterion) {
    let n = 100;
    let this = black_box(Matrix::new(1.23123, n, n));
    let x = black_box(Matrix::new(0.5, n, 1));
    let mut into = black_box(Matrix::zeros(n, 1));

    c.bench_function("prod_vector", |b| b.iter(|| this.prod_into(&x, &mut into)));
}

pub fn swap_rows(c: &mut Criterion) {
    let n = 100;
    let mut this = black_box(Matrix::new(1.23123, n, n));

    c.bench_function("swap_rows", |b| b.iter(|| this.swap_rows(3, n - 4)));
}

criterion_group!(benches, prod_into, prod_vector, swap_rows);
criterion_main!(benches);
