//! Criterion benchmarks for disabled trace calls.
//!
//! Compares calling `trace_fmt` unconditionally with checking
//! `is_trace_enabled()` first, for a category that resolves to the null
//! default and for one whose adapter filters trace out.
//!
//! ```bash
//! cargo bench -p catlog --bench trace_call
//! ```

use catlog::log::{LevelFilter, LogLevel, MemoryAdapter};
use catlog::proxy::Logger;
use catlog::registry::Registry;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

fn loggers() -> Vec<(&'static str, Logger)> {
    let registry = Arc::new(Registry::new());
    registry.bind(
        "filtered",
        Arc::new(LevelFilter::new(
            Arc::new(MemoryAdapter::new()),
            LogLevel::Info,
        )),
    );

    vec![
        ("null_default", registry.logger("unbound.category")),
        ("level_filtered", registry.logger("filtered.category")),
    ]
}

fn bench_disabled_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled_trace");

    for (name, logger) in loggers() {
        group.bench_with_input(
            BenchmarkId::new("unconditional", name),
            &logger,
            |b, logger| {
                b.iter(|| logger.trace_fmt(format_args!("value {}", black_box(42))));
            },
        );

        group.bench_with_input(BenchmarkId::new("guarded", name), &logger, |b, logger| {
            b.iter(|| {
                if logger.is_trace_enabled() {
                    logger.trace_fmt(format_args!("value {}", black_box(42)));
                }
            });
        });
    }

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let registry = Arc::new(Registry::new());
    registry.bind("app", Arc::new(MemoryAdapter::new()));
    let logger = registry.logger("app.db.pool.connection");

    c.bench_function("cached_adapter_lookup", |b| {
        b.iter(|| black_box(logger.adapter()));
    });
}

criterion_group!(benches, bench_disabled_trace, bench_resolution);
criterion_main!(benches);
