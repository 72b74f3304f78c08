//! Gate and rule application benchmarks
//!
//! Measures the cost a call site pays for a suppressed message and the cost
//! of re-applying rules across a populated registry.

use catlog_logging::{Category, LogLevel, LogStream, Registry, StreamSink, catlog};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_check_log_level(c: &mut Criterion) {
    let registry = Registry::new();
    let category = Category::with_registry(&registry, "bench", LogLevel::Warn);

    c.bench_function("check_log_level_suppressed", |b| {
        b.iter(|| category.check_log_level(black_box(LogLevel::Debug)))
    });

    c.bench_function("check_log_level_enabled", |b| {
        b.iter(|| category.check_log_level(black_box(LogLevel::Error)))
    });
}

fn bench_suppressed_macro(c: &mut Criterion) {
    let registry = Registry::new();
    let category = Category::with_registry(&registry, "bench", LogLevel::Warn);
    let stream = LogStream::new(StreamSink::new(std::io::sink()));

    c.bench_function("catlog_suppressed", |b| {
        b.iter(|| catlog!(to &stream; category, LogLevel::Debug, "value {}", black_box(42)))
    });

    c.bench_function("catlog_emitted_to_null", |b| {
        b.iter(|| catlog!(to &stream; category, LogLevel::Error, "value {}", black_box(42)))
    });
}

fn bench_set_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_rules");

    for count in [10usize, 100, 1000] {
        let registry = Registry::new();
        let categories: Vec<Category> = (0..count)
            .map(|i| Category::with_registry(&registry, format!("cat{i}"), LogLevel::Info))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| registry.set_rules(black_box("*=2,cat1=5,cat7=3,bogus")))
        });

        drop(categories);
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_check_log_level,
    bench_suppressed_macro,
    bench_set_rules
);
criterion_main!(benches);
