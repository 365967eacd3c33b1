//! Criterion benchmarks for rust_leveled_logger

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{format_parts, LogRecord};
use std::sync::Arc;

// ============================================================================
// Call Path Benchmarks
// ============================================================================

fn bench_call_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_path");
    group.throughput(Throughput::Elements(1));

    let dispatcher = Arc::new(Dispatcher::new().expect("dispatcher"));
    let logger = Logger::builder()
        .level(LogLevel::Info)
        .streams(StreamTable::new())
        .dispatcher(Arc::clone(&dispatcher))
        .build()
        .expect("logger");

    group.bench_function("rejected", |b| {
        b.iter(|| {
            logger.finest(black_box(["Finest message"]));
        });
    });

    group.bench_function("accepted_empty_table", |b| {
        b.iter(|| {
            logger.info(black_box(["Info message"]));
        });
    });

    group.bench_function("accepted_with_args", |b| {
        b.iter(|| {
            logger.info([
                Arg::from(black_box("request %s took %dms")),
                Arg::from(black_box("/health")),
                Arg::from(black_box(12)),
            ]);
        });
    });

    group.finish();
    dispatcher.flush().expect("flush");
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let parts = vec![
        Arg::from("user %s logged in from %s after %d attempts"),
        Arg::from("alice"),
        Arg::from("10.0.0.7"),
        Arg::from(3),
    ];
    group.bench_function("format_parts", |b| {
        b.iter(|| black_box(format_parts(black_box(&parts))));
    });

    let instant = Utc
        .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
        .single()
        .expect("valid datetime");
    let layout = LineLayout::new(TimestampZone::Utc, false);

    let single = LogRecord::new(LogLevel::Info, 3, vec![Arg::from("single line")])
        .with_timestamp(instant);
    group.bench_function("render_single_line", |b| {
        b.iter(|| black_box(layout.render(black_box(&single), Some("bench"))));
    });

    let multi = LogRecord::new(
        LogLevel::Severe,
        3,
        vec![Arg::from("error:\n  at a\n  at b\n  at c\n  at d")],
    )
    .with_timestamp(instant);
    group.bench_function("render_multi_line", |b| {
        b.iter(|| black_box(layout.render(black_box(&multi), Some("bench"))));
    });

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    group.throughput(Throughput::Elements(100));

    let dispatcher = Arc::new(Dispatcher::new().expect("dispatcher"));
    let memory = MemoryStream::new();
    let logger = Logger::builder()
        .level(LogLevel::Finest)
        .stream(memory.clone(), LevelSet::all())
        .dispatcher(Arc::clone(&dispatcher))
        .build()
        .expect("logger");

    group.bench_function("log_100_then_flush", |b| {
        b.iter(|| {
            for i in 0..100 {
                logger.fine([Arg::from("item %d"), Arg::from(i)]);
            }
            dispatcher.flush().expect("flush");
            memory.clear();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_call_path, bench_formatting, bench_end_to_end);
criterion_main!(benches);
