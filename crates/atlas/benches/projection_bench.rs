//! Criterion benchmarks for the per-frame marker pipeline.
//!
//! Benchmarks:
//!   - project() for a single coordinate
//!   - projecting every catalog city
//!   - visible_city_ids for "All" and a single continent
//!
//! Run with: cargo bench -p atlas --bench projection_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use atlas::catalog::CITY_CATALOG;
use atlas::config::GLOBE_RADIUS;
use atlas::continent::{Continent, ContinentFilter};
use atlas::filter::visible_city_ids;
use atlas::geo::project;

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo_project");

    group.bench_function("single", |b| {
        b.iter(|| black_box(project(black_box(48.8566), black_box(2.3522), black_box(1.0))));
    });

    group.bench_function("whole_catalog", |b| {
        b.iter(|| {
            for record in &CITY_CATALOG {
                black_box(record.coord.project(black_box(GLOBE_RADIUS)));
            }
        });
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("continent_filter");

    group.bench_function("all", |b| {
        b.iter(|| black_box(visible_city_ids(black_box(ContinentFilter::All))));
    });

    group.bench_function("europe", |b| {
        b.iter(|| {
            black_box(visible_city_ids(black_box(ContinentFilter::Only(
                Continent::Europe,
            ))))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_project, bench_filter);
criterion_main!(benches);
