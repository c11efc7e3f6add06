//! Benchmarks for the KPI aggregation and full report pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use recoveriq::{build_report, compute_kpis, generate_demo_leads, KpiConfig, RecoverIqConfig};
use std::hint::black_box;

fn bench_compute_kpis(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_kpis");
    for rows in [500, 10_000, 100_000] {
        let table = generate_demo_leads(rows, 42).unwrap();
        let config = KpiConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| black_box(compute_kpis(table, &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_build_report(c: &mut Criterion) {
    let table = generate_demo_leads(500, 42).unwrap();
    let config = RecoverIqConfig::default();

    c.bench_function("build_report_500", |b| {
        b.iter(|| black_box(build_report(&table, &config).unwrap()));
    });
}

criterion_group!(benches, bench_compute_kpis, bench_build_report);
criterion_main!(benches);
