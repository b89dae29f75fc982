use criterion::{criterion_group, criterion_main, Criterion};
use duress::core::churn::{churn, ChurnConfig};
use duress::core::spike::{spike, SpikeConfig};
use duress::RunMode;

fn spike_commit_release(c: &mut Criterion) {
    let config = SpikeConfig {
        megabytes: 8,
        hold_seconds: 0,
    };
    c.bench_function("spike_8mib_commit_release", |b| {
        b.iter(|| spike(&config, RunMode::execute(), None).unwrap())
    });
}

fn churn_single_round(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let config = ChurnConfig {
        iterations: 1,
        bytes_per_iteration: 64 * 1024,
        file: Some(dir.path().join("bench.dat")),
    };
    c.bench_function("churn_64kib_round", |b| {
        b.iter(|| churn(&config, RunMode::execute(), None).unwrap())
    });
}

criterion_group!(benches, spike_commit_release, churn_single_round);
criterion_main!(benches);
