// ABOUTME: Criterion benchmarks for the analytics aggregation engine
// ABOUTME: Measures record grouping, overview assembly, and muscle balance computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analytics aggregation engine.
//!
//! Measures grouping and sorting of personal records, the complete records
//! overview, and the muscle balance pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    generate_logged_sets, generate_muscle_samples, generate_records, reference_now,
    RecordBatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitai_analytics::intelligence::{BalanceAnalyzer, Recency, RecordGrouper};
use fitai_analytics::models::{RecordType, RecordTypeFilter, ReportingPeriod};
use fitai_analytics::services::{MuscleBalanceService, RecordsService};

/// Benchmark exercise grouping with varying dataset sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_record_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_grouping");
    let recency = Recency::at(reference_now());
    let grouper = RecordGrouper::default();

    for size in [
        RecordBatchSize::Small,
        RecordBatchSize::Medium,
        RecordBatchSize::Large,
    ] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("group_by_exercise", size.count()),
            &records,
            |b, records| b.iter(|| grouper.group(black_box(records), &recency)),
        );
        group.bench_with_input(
            BenchmarkId::new("summarize", size.count()),
            &records,
            |b, records| b.iter(|| grouper.summarize(black_box(records), &recency)),
        );
    }

    group.finish();
}

/// Benchmark the complete records overview with and without filters
fn bench_records_overview(c: &mut Criterion) {
    let mut group = c.benchmark_group("records_overview");
    let recency = Recency::at(reference_now());
    let service = RecordsService::default();
    let records = generate_records(RecordBatchSize::Medium);

    group.bench_function("unfiltered", |b| {
        b.iter(|| {
            service.overview(
                black_box(&records),
                "",
                &RecordTypeFilter::All,
                &recency,
            )
        });
    });

    let filter = RecordTypeFilter::from(RecordType::OneRepMax);
    group.bench_function("query_and_type_filter", |b| {
        b.iter(|| service.overview(black_box(&records), "exercise 1", &filter, &recency));
    });

    group.bench_function("timeline", |b| {
        let focal = &records[1];
        b.iter(|| service.timeline(black_box(&records), focal, &recency));
    });

    group.finish();
}

/// Benchmark the muscle balance pipeline
fn bench_muscle_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("muscle_balance");
    let samples = generate_muscle_samples();
    let analyzer = BalanceAnalyzer::default();
    let service = MuscleBalanceService::default();

    group.bench_function("to_percentages_and_segment", |b| {
        b.iter(|| {
            let data = analyzer.to_percentages(black_box(&samples));
            analyzer.segment(&data)
        });
    });

    group.bench_function("report", |b| {
        b.iter(|| service.report(black_box(&samples), ReportingPeriod::Week));
    });

    let sets = generate_logged_sets(1000);
    group.bench_function("report_from_sets", |b| {
        b.iter(|| service.report_from_sets(black_box(&sets), ReportingPeriod::Month));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_record_grouping,
    bench_records_overview,
    bench_muscle_balance
);
criterion_main!(benches);
