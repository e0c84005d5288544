//! Benchmarks for streamvar accumulators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamvar::traits::Accumulator;
use streamvar::{OnlineVariance, OnlineVarianceMinMax};

// ============================================================================
// Online Variance Benchmarks
// ============================================================================

fn bench_online_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("online_variance");
    group.throughput(Throughput::Elements(1));

    group.bench_function("update", |b| {
        let mut v = OnlineVariance::new();
        let mut i = 0u64;
        b.iter(|| {
            v.update(black_box(i as f64));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let v: OnlineVariance = (0..100_000u64).map(|i| i as f64).collect();
        b.iter(|| {
            black_box(v.mean());
            black_box(v.variance());
            black_box(v.sample_variance());
            black_box(v.stddev());
        });
    });

    group.bench_function("merge", |b| {
        let s1: OnlineVariance = (0..10_000u64).map(|i| i as f64).collect();
        let s2: OnlineVariance = (10_000..20_000u64).map(|i| i as f64).collect();
        b.iter(|| {
            let mut s = s1;
            s.merge(black_box(&s2)).unwrap();
            black_box(s);
        });
    });

    group.finish();
}

// ============================================================================
// Online Variance With Min/Max Benchmarks
// ============================================================================

fn bench_online_variance_min_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("online_variance_min_max");
    group.throughput(Throughput::Elements(1));

    group.bench_function("update", |b| {
        let mut v = OnlineVarianceMinMax::new();
        let mut i = 0u64;
        b.iter(|| {
            // alternate sign so both extremes keep moving
            let x = if i % 2 == 0 { i as f64 } else { -(i as f64) };
            v.update(black_box(x));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let v: OnlineVarianceMinMax = (0..100_000u64).map(|i| i as f64).collect();
        b.iter(|| {
            black_box(v.mean());
            black_box(v.variance());
            black_box(v.min());
            black_box(v.max());
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_online_variance, bench_online_variance_min_max);

criterion_main!(benches);
