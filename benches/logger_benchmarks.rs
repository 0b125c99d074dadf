//! Criterion benchmarks for console_logger

use console_logger::core::{timestamp, Buffer};
use console_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use std::sync::Arc;
use std::thread;

fn discard_logger(color: ColorMode, timestamp: bool) -> Logger {
    Logger::builder()
        .color(color)
        .timestamp(timestamp)
        .output(io::sink())
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(discard_logger(ColorMode::Never, true)));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let plain = discard_logger(ColorMode::Never, true);
    let colored = discard_logger(ColorMode::Always, true);
    let bare = discard_logger(ColorMode::Never, false);

    group.bench_function("info_plain", |b| {
        b.iter(|| plain.info(black_box("Info message")));
    });

    group.bench_function("info_colored", |b| {
        b.iter(|| colored.info(black_box("Info message")));
    });

    group.bench_function("info_no_timestamp", |b| {
        b.iter(|| bare.info(black_box("Info message")));
    });

    group.bench_function("error_with_call_site", |b| {
        b.iter(|| plain.error(black_box("Error message")));
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| plain.info(format_args!("request {} took {}ms", black_box(42), black_box(7))));
    });

    group.bench_function("macro_with_function_name", |b| {
        b.iter(|| console_logger::error!(plain, "code {}", black_box(500)));
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(ColorMode::Never, true);
    logger.set_log_level(LogLevel::Error);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Filtered")));
    });

    group.bench_function("filtered_info", |b| {
        b.iter(|| logger.info(black_box("Filtered")));
    });

    let quiet = discard_logger(ColorMode::Never, true);
    quiet.quiet();

    group.bench_function("quiet_error", |b| {
        b.iter(|| quiet.error(black_box("Suppressed")));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        let messages_per_thread = 100;
        group.throughput(Throughput::Elements((threads * messages_per_thread) as u64));

        let logger = Arc::new(discard_logger(ColorMode::Never, true));
        group.bench_function(format!("{}_threads", threads), |b| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..messages_per_thread {
                                let _ = logger.info(format_args!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    let mut buf = Buffer::with_capacity(64);
    group.bench_function("append_int_padded", |b| {
        b.iter(|| {
            buf.reset();
            buf.append_int(black_box(7), 2);
            buf.append_int(black_box(2021), 4);
        });
    });

    let now = timestamp::now();
    group.bench_function("append_timestamp", |b| {
        b.iter(|| {
            buf.reset();
            timestamp::append_timestamp(&mut buf, black_box(&now));
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_concurrent_logging,
    bench_encoding
);

criterion_main!(benches);
