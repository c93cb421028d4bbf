//! Criterion benchmarks for the SAW pipeline.
//!
//! Uses a synthetic dataset (deterministic pseudo-values, mixed
//! benefit/cost criteria) to measure the full normalize→score→rank path
//! at session-realistic and stress sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use saw_rank::criteria::{CriteriaConfig, Direction};
use saw_rank::dataset::Record;
use saw_rank::saw;

fn criteria() -> CriteriaConfig {
    CriteriaConfig::new()
        .with_criterion("ram", 0.25, Direction::Benefit)
        .with_criterion("storage", 0.20, Direction::Benefit)
        .with_criterion("price", 0.25, Direction::Cost)
        .with_criterion("camera", 0.15, Direction::Benefit)
        .with_criterion("battery", 0.15, Direction::Benefit)
}

fn synthetic_records(n: usize, criteria: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            name: format!("item-{i}"),
            // Cheap deterministic spread; values stay positive so cost
            // columns never hit the zero special case.
            values: (0..criteria)
                .map(|j| 1.0 + ((i * 31 + j * 17) % 97) as f64)
                .collect(),
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let config = criteria();
    let mut group = c.benchmark_group("normalize");
    for &n in &[10, 100, 1_000, 10_000] {
        let records = synthetic_records(n, config.len());
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| saw::normalize(black_box(records), &config).unwrap());
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let config = criteria();
    let mut group = c.benchmark_group("normalize_score_rank");
    for &n in &[10, 100, 1_000, 10_000] {
        let records = synthetic_records(n, config.len());
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                let normalized = saw::normalize(black_box(records), &config).unwrap();
                saw::rank(&normalized, &config)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_full_pipeline);
criterion_main!(benches);
