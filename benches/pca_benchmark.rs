use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use tabular_insight::dataset::{Column, Dataset};
use tabular_insight::dimred::PcaReducer;

fn create_test_dataset(rows: usize, features: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::try_from(0.0..1.0).unwrap();

    let columns = (0..features)
        .map(|j| {
            let values = (0..rows).map(|_| dist.sample(&mut rng)).collect();
            (format!("f{j}"), Column::Numeric(values))
        })
        .collect();
    Dataset::new(columns).unwrap()
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca_reduce");

    for &(rows, features) in &[(1_000, 8), (10_000, 8), (10_000, 32)] {
        let dataset = create_test_dataset(rows, features, 42);
        let names: Vec<String> = (0..features).map(|j| format!("f{j}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let reducer = PcaReducer::new().n_components(2);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{features}")),
            &dataset,
            |b, dataset| b.iter(|| reducer.reduce(dataset, &names).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
