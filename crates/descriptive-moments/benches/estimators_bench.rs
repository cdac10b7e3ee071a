use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use descriptive_core::DivisorMode;
use descriptive_frequency::frequency_table;
use descriptive_moments::{GroupedEstimator, UngroupedEstimator};
use rand::prelude::*;

fn generate_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Rounded to one decimal so the sample has repeated values
    (0..n)
        .map(|_| (rng.gen_range(0.0..100.0_f64) * 10.0).round() / 10.0)
        .collect()
}

fn bench_ungrouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("ungrouped");
    let estimator = UngroupedEstimator::new(DivisorMode::Sample);

    for &n in &[100, 1_000, 10_000] {
        let sample = generate_sample(n, 42);
        group.bench_with_input(BenchmarkId::new("estimate", n), &sample, |b, sample| {
            b.iter(|| estimator.estimate(black_box(sample)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("frequency_table", n), &sample, |b, sample| {
            b.iter(|| frequency_table(black_box(sample)).unwrap())
        });
    }
    group.finish();
}

fn bench_grouped(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouped");
    let estimator = GroupedEstimator::new(DivisorMode::Population);
    let mut rng = StdRng::seed_from_u64(7);

    for &classes in &[5, 20, 100] {
        let labels: Vec<String> = (0..classes)
            .map(|i| format!("{}-{}", i * 5, (i + 1) * 5))
            .collect();
        let frequencies: Vec<u64> = (0..classes).map(|_| rng.gen_range(1..50)).collect();

        group.bench_with_input(
            BenchmarkId::new("estimate_labels", classes),
            &(labels, frequencies),
            |b, (labels, frequencies)| {
                b.iter(|| {
                    estimator
                        .estimate_labels(black_box(labels), black_box(frequencies))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ungrouped, bench_grouped);
criterion_main!(benches);
