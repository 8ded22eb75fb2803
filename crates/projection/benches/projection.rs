//! Throughput of a full twin projection against in-memory artifacts.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use foresight_ai::{FeatureEncoder, LinearRegressionModel, SoftmaxClassifierModel};
use foresight_core::{ProjectionHorizon, UserProfile};
use foresight_projection::{TwinProjector, top_k};

fn vocab(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}-{i}")).collect()
}

fn encoder() -> FeatureEncoder {
    FeatureEncoder {
        education: vocab("edu", 6),
        location: vocab("loc", 50),
        title: vocab("title", 40),
        industry: vocab("ind", 20),
    }
}

fn projector(parallel: bool) -> TwinProjector {
    let encoder = encoder();
    let width = encoder.width();
    let titles = vocab("title", 40);

    let salary = LinearRegressionModel {
        encoder: encoder.clone(),
        coefficients: (0..width).map(|i| i as f64 * 13.0).collect(),
        intercept: 30_000.0,
    };
    let jobs = SoftmaxClassifierModel {
        encoder,
        weights: (0..titles.len())
            .map(|k| (0..width).map(|i| ((i + k) % 7) as f64 * 0.01).collect())
            .collect(),
        biases: vec![0.0; titles.len()],
        classes: titles,
    };

    TwinProjector::new(Arc::new(salary), Arc::new(jobs)).with_parallel_inference(parallel)
}

fn profile() -> UserProfile {
    UserProfile {
        age: Some(34),
        tenure_months: Some(40),
        education: Some("edu-2".into()),
        location: Some("loc-17".into()),
        title: Some("title-5".into()),
        industry: Some("ind-3".into()),
        remote_flag: Some(true),
        avg_sleep_hours: Some(6.5),
    }
}

fn bench_projection(c: &mut Criterion) {
    let profile = profile();

    let sequential = projector(false);
    c.bench_function("project_twin_sequential", |b| {
        b.iter(|| sequential.project(black_box(&profile), ProjectionHorizon::FiveYears))
    });

    let parallel = projector(true);
    c.bench_function("project_twin_parallel", |b| {
        b.iter(|| parallel.project(black_box(&profile), ProjectionHorizon::FiveYears))
    });
}

fn bench_top_k(c: &mut Criterion) {
    let labels = vocab("title", 500);
    let probs: Vec<f64> = (0..labels.len()).map(|i| ((i * 7919) % 500) as f64 / 500.0).collect();

    c.bench_function("top_3_of_500", |b| b.iter(|| top_k(black_box(&labels), black_box(&probs), 3)));
}

criterion_group!(benches, bench_projection, bench_top_k);
criterion_main!(benches);
