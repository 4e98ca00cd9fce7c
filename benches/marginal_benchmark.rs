#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for building marginal layers and plot specs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ggmarginal::prelude::*;

fn marginal_layers_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("marginal_layers");

    let base = Layer::histogram().bins(10).color("white").alpha(0.5);
    for sides in ["l", "lr", "trb", "trbl"] {
        let sizes: Vec<f64> = (0..sides.len()).map(|i| 0.1 + 0.05 * i as f64).collect();

        group.bench_with_input(BenchmarkId::from_parameter(sides), &sides, |b, sides| {
            b.iter(|| ggmarginal(black_box(sides), sizes.as_slice(), &base).unwrap());
        });
    }

    group.finish();
}

fn plot_spec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_spec");

    for size in [100, 1_000, 10_000] {
        // Deterministic pseudo-random scatter
        let x: Vec<f64> = (0..size).map(|i| (f64::from(i) * 0.37).sin() * 3.0).collect();
        let y: Vec<f64> = (0..size).map(|i| (f64::from(i) * 0.11).cos() + f64::from(i % 7)).collect();

        let plot = GGPlot::with_data(DataFrame::from_xy(&x, &y))
            .mapping(Aes::new().x("x").y("y"))
            + Layer::point()
            + ggmarginal("tr", [0.1, 0.2], &Layer::histogram()).unwrap()
            + ggmarginal("tr", [0.1, 0.2], &Layer::density()).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&plot).to_spec().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, marginal_layers_benchmark, plot_spec_benchmark);
criterion_main!(benches);
