//! Pipeline benchmark: records → features → normalization → partition.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phishscope::cluster::{partition, CancelToken};
use phishscope::config::{ClusteringConfig, RiskConfig};
use phishscope::dataset;
use phishscope::engine::analyze;
use phishscope::features::{extract_batch, normalize};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_extract_and_normalize(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let records = dataset::generate(1_000, &mut rng);

    c.bench_function("extract_normalize_1000_records", |b| {
        b.iter(|| {
            let vectors = extract_batch(black_box(&records));
            black_box(normalize(&vectors).unwrap())
        })
    });
}

fn bench_partition_by_k(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let records = dataset::generate(1_000, &mut rng);
    let matrix = normalize(&extract_batch(&records)).unwrap();
    let cancel = CancelToken::new();

    let mut g = c.benchmark_group("partition_1000_records");
    for k in [2, 4, 8] {
        g.bench_function(format!("k_{}", k).as_str(), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(3);
                black_box(partition(black_box(&matrix), k, 100, &mut rng, &cancel).unwrap())
            })
        });
    }
    g.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let records = dataset::generate(500, &mut rng);
    let clustering = ClusteringConfig { k: 3, max_iterations: 100, seed: Some(4) };
    let risk = RiskConfig::default();
    let cancel = CancelToken::new();

    c.bench_function("full_analysis_500_records", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(5);
            black_box(
                analyze(black_box(records.clone()), &clustering, &risk, &mut rng, &cancel)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_extract_and_normalize,
    bench_partition_by_k,
    bench_full_analysis
);
criterion_main!(benches);
