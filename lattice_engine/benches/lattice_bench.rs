// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice_engine::{analyze_cube, enumerate_cube};

fn bench_enumerate_cube(c: &mut Criterion) {
    c.bench_function("enumerate_cube", |b| {
        b.iter(|| black_box(enumerate_cube()));
    });
}

fn bench_analyze_cube(c: &mut Criterion) {
    c.bench_function("analyze_cube", |b| {
        b.iter(|| {
            let report = analyze_cube();
            black_box(report.valid_anchor_count);
        });
    });
}

criterion_group!(benches, bench_enumerate_cube, bench_analyze_cube);
criterion_main!(benches);
