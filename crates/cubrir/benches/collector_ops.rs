//! Collector Operations Benchmarks
//!
//! Benchmarks for the per-event hot path: cache-hit lookups, alternating
//! cache misses, and cold registry growth.
//!
//! Run with: `cargo bench --bench collector_ops`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cubrir::CoverageCollector;

fn bench_same_file_hot_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_file_hot_loop");

    // The dominant real-world pattern: thousands of consecutive events from
    // the currently-executing file, served by the single-slot cache.
    for event_count in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_events", event_count)),
            &event_count,
            |bench, &n| {
                bench.iter(|| {
                    let mut collector = CoverageCollector::default();
                    for i in 0..n {
                        collector
                            .on_line_executed(black_box("src/game.lua"), black_box(i % 500))
                            .unwrap();
                    }
                    black_box(collector);
                });
            },
        );
    }

    group.finish();
}

fn bench_alternating_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating_files");

    // Worst case for the cache: every event misses and falls back to the
    // binary search.
    for file_count in [2, 16, 128] {
        let paths: Vec<String> = (0..file_count).map(|i| format!("src/mod_{i:04}.lua")).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_files", file_count)),
            &paths,
            |bench, paths| {
                bench.iter(|| {
                    let mut collector = CoverageCollector::default();
                    for i in 0..10_000u32 {
                        let path = &paths[i as usize % paths.len()];
                        collector
                            .on_line_executed(black_box(path), black_box(i % 500))
                            .unwrap();
                    }
                    black_box(collector);
                });
            },
        );
    }

    group.finish();
}

fn bench_cold_registry_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_registry_growth");

    for file_count in [100, 1_000] {
        let paths: Vec<String> = (0..file_count).map(|i| format!("src/mod_{i:04}.lua")).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_files", file_count)),
            &paths,
            |bench, paths| {
                bench.iter(|| {
                    let mut collector = CoverageCollector::default();
                    for path in paths {
                        collector.on_line_executed(black_box(path), 1).unwrap();
                    }
                    black_box(collector);
                });
            },
        );
    }

    group.finish();
}

fn bench_report_snapshot(c: &mut Criterion) {
    let mut collector = CoverageCollector::default();
    for f in 0..50 {
        let path = format!("src/mod_{f:02}.lua");
        for line in 0..2_000 {
            collector.on_line_executed(&path, line).unwrap();
        }
    }

    c.bench_function("report_snapshot_50_files", |bench| {
        bench.iter(|| black_box(collector.report()));
    });
}

criterion_group!(
    benches,
    bench_same_file_hot_loop,
    bench_alternating_files,
    bench_cold_registry_growth,
    bench_report_snapshot
);
criterion_main!(benches);
