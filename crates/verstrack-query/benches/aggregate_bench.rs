//! Benchmark: grouping joined view rows into version aggregates.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use verstrack_core::config::GroupingMode;
use verstrack_core::models::ViewSchema;
use verstrack_core::record::Record;
use verstrack_query::GroupAggregator;

fn view_rows(versions: i64, files_per_version: i64) -> Vec<Record> {
    let mut rows = Vec::new();
    for version in 0..versions {
        for file in 0..files_per_version {
            rows.push(
                Record::new()
                    .with("version_id", version)
                    .with("version_name", format!("v{version}"))
                    .with("version_datetime", 1_600_000_000 + version * 60)
                    .with("project_id", 1)
                    .with("project_name", "alpha")
                    .with("file_id", version * files_per_version + file)
                    .with("file_name", format!("f{file}.txt"))
                    .with("file_datetime", 1_600_000_000.5 + file as f64),
            );
        }
    }
    rows
}

fn bench_aggregate(c: &mut Criterion) {
    let rows = view_rows(500, 8);

    let stable = GroupAggregator::new(ViewSchema::default(), GroupingMode::Stable);
    c.bench_function("aggregate_4000_rows_stable", |b| {
        b.iter(|| stable.aggregate(black_box(&rows)))
    });

    let contiguous = GroupAggregator::new(ViewSchema::default(), GroupingMode::Contiguous);
    c.bench_function("aggregate_4000_rows_contiguous", |b| {
        b.iter(|| contiguous.aggregate(black_box(&rows)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
