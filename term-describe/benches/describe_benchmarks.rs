//! Benchmarks for overall and grouped descriptions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use term_describe::grouping::GroupingConfig;
use term_describe::report::grouped_report;
use term_describe::statistics::{ColumnCalculator, StatisticsCalculator};
use term_describe::summary::{SummaryConfig, TableDescriber};
use term_describe::test_fixtures::synthetic_table;

fn bench_overall_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_report");
    group.measurement_time(Duration::from_secs(5));

    for rows in [1_000, 10_000, 100_000] {
        let table = synthetic_table(rows, 50);
        let calculator = StatisticsCalculator::new();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| calculator.compute_report(black_box(&table.scope())));
        });
    }

    group.finish();
}

fn bench_grouping_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_limits");
    group.measurement_time(Duration::from_secs(5));

    // Work should scale with the limit, not the number of groups.
    let table = synthetic_table(50_000, 1_000);
    for limit in [1, 5, 50, 1_000] {
        let config = GroupingConfig::new(["page_id"]).with_max_groups(limit);
        group.bench_with_input(BenchmarkId::new("page_id", limit), &config, |b, config| {
            b.iter(|| grouped_report(&StatisticsCalculator, black_box(&table.scope()), config));
        });
    }

    group.finish();
}

fn bench_full_summary(c: &mut Criterion) {
    let table = synthetic_table(20_000, 200);
    let describer = TableDescriber::new(SummaryConfig::default());

    c.bench_function("full_summary_20k", |b| {
        b.iter(|| describer.describe(black_box(&table)));
    });
}

criterion_group!(
    benches,
    bench_overall_report,
    bench_grouping_limits,
    bench_full_summary
);
criterion_main!(benches);
