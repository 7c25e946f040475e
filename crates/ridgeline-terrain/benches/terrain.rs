//! Terrain sampling and chunk building benchmarks.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ridgeline_common::ChunkIndex;
use ridgeline_terrain::{ChunkFactCache, GeometryBuilder, HeightField, TerrainConfig};

fn bench_height_sampling(c: &mut Criterion) {
    let config = TerrainConfig::with_seed(0xC0FFEE);
    let field = HeightField::new(&config).expect("default config is valid");

    let mut group = c.benchmark_group("height_field");
    for x in [50.0, 120.0, 5_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(x), &x, |b, &x| {
            b.iter(|| black_box(field.height(black_box(x))));
        });
    }
    group.finish();
}

fn bench_build_ridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_ridge");
    for points in [20u32, 80, 320] {
        let config = TerrainConfig {
            points_per_chunk: points,
            ..TerrainConfig::with_seed(7)
        };
        let field = HeightField::new(&config).expect("valid config");
        let builder = GeometryBuilder::new(&config).expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, _| {
            b.iter(|| black_box(builder.build_ridge(ChunkIndex::ORIGIN, &field)));
        });
    }
    group.finish();
}

fn bench_fact_cache_cold(c: &mut Criterion) {
    let config = TerrainConfig::with_seed(3);
    c.bench_function("fact_cache_expand_1000", |b| {
        b.iter(|| {
            let mut cache = ChunkFactCache::new(&config).expect("valid config");
            let index = ChunkIndex::new(1_000).expect("in range");
            black_box(cache.start_position(index))
        });
    });
}

criterion_group!(
    benches,
    bench_height_sampling,
    bench_build_ridge,
    bench_fact_cache_cold
);
criterion_main!(benches);
