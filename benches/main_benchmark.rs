use bitmath::{fast_sqrt, inv_sqrt, log, powi};

fn test_inv_sqrt() {
    for i in 1..1000u32 {
        black_box(inv_sqrt(black_box(i as f32)));
    }
}

fn test_fast_sqrt() {
    for i in 1..1000u32 {
        black_box(fast_sqrt(black_box(i as f32)));
    }
}

fn test_log() {
    for i in 1..100u32 {
        black_box(log(black_box(i as f32 + 0.5), 2.0, 1.0e-13));
    }
}

fn test_powi() {
    for i in 0..100 {
        black_box(powi(black_box(1.001), i));
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_inv_sqrt", |b| b.iter(test_inv_sqrt));
    c.bench_function("test_fast_sqrt", |b| b.iter(test_fast_sqrt));
    c.bench_function("test_log", |b| b.iter(test_log));
    c.bench_function("test_powi", |b| b.iter(test_powi));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
