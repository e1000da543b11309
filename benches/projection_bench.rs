use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use growthmap::commands::recompute;
use growthmap::config::presets::default_scenarios;
use growthmap::{compare_scenarios, GrowthmapConfig, Metric, ProjectionSettings, Section, SessionState};
use std::hint::black_box;

fn bench_scenario_comparison(c: &mut Criterion) {
    let listeners = Metric::new("spotify_listeners", 2.0, 500.0);
    let streams = Metric::new("total_streams", 1000.0, 15000.0);
    let mut group = c.benchmark_group("scenario_comparison");

    for checkpoints in [4u32, 13, 52] {
        let settings = ProjectionSettings {
            checkpoints: (0..checkpoints).map(|i| i * 7).collect(),
            ..Default::default()
        };
        let scenarios = default_scenarios();
        group.bench_with_input(
            BenchmarkId::from_parameter(checkpoints),
            &settings,
            |b, settings| {
                b.iter(|| compare_scenarios(black_box(&scenarios), &listeners, &streams, settings))
            },
        );
    }
    group.finish();
}

fn bench_full_pass(c: &mut Criterion) {
    let config = GrowthmapConfig::default();
    let session = SessionState::new(Section::Scenarios);
    c.bench_function("recompute_scenarios", |b| {
        b.iter(|| recompute(black_box(&config), black_box(&session)))
    });
}

criterion_group!(benches, bench_scenario_comparison, bench_full_pass);
criterion_main!(benches);
