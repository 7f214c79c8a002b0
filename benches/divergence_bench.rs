//! Benchmarks for pairwise divergence computation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use divergence_matrix::{jsd, jsd_matrix, kld};

fn generate_distribution(n: usize, seed: u64) -> Vec<f64> {
    // Simple deterministic pseudo-random for reproducibility
    let mut dist = Vec::with_capacity(n);
    let mut x = seed;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        dist.push((x as f64) / (u64::MAX as f64));
    }
    // Normalize
    let sum: f64 = dist.iter().sum();
    for x in &mut dist {
        *x /= sum;
    }
    dist
}

fn bench_kld(c: &mut Criterion) {
    let mut group = c.benchmark_group("kld");

    for size in [10, 50, 100, 500, 1000].iter() {
        let p = generate_distribution(*size, 42);
        let q = generate_distribution(*size, 123);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| kld(black_box(&p), black_box(&q)))
        });
    }

    group.finish();
}

fn bench_jsd(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsd");

    for size in [10, 50, 100, 500, 1000].iter() {
        let p = generate_distribution(*size, 42);
        let q = generate_distribution(*size, 123);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| jsd(black_box(&p), black_box(&q)))
        });
    }

    group.finish();
}

fn bench_jsd_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsd_matrix");

    // Fixed dimension, sweep the number of rows (quadratic pair count)
    for n_rows in [5, 10, 20, 50].iter() {
        let rows: Vec<Vec<f64>> = (0..*n_rows)
            .map(|i| generate_distribution(50, i as u64))
            .collect();

        group.throughput(Throughput::Elements((n_rows * n_rows) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), n_rows, |b, _| {
            b.iter(|| jsd_matrix(black_box(&rows)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kld, bench_jsd, bench_jsd_matrix);

criterion_main!(benches);
