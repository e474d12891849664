//! Benchmarks for card_checker performance testing.
//!
//! Run with: cargo bench

use card_checker::expiry::{FixedClock, YearMonth};
use card_checker::{
    detect_network, luhn, normalize, stream::ValidateExt, BatchConfig, BatchProcessor, Validator,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_LINE: &str = "4111111111111111|12|2030|123";
const VISA_FORMATTED_LINE: &str = "4111-1111-1111-1111|12|2030|123";
const AMEX_LINE: &str = "378282246310005|12|2030|1234";
const BAD_LUHN_LINE: &str = "4111111111111112|12|2030|123";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

fn validator() -> Validator {
    Validator::default().with_clock(FixedClock(YearMonth::new(2026, 10)))
}

/// Benchmark single record validation
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");
    let v = validator();

    group.bench_function("visa_raw", |b| b.iter(|| v.validate(black_box(VISA_LINE))));
    group.bench_function("visa_formatted", |b| {
        b.iter(|| v.validate(black_box(VISA_FORMATTED_LINE)))
    });
    group.bench_function("amex", |b| b.iter(|| v.validate(black_box(AMEX_LINE))));
    group.bench_function("early_reject", |b| {
        b.iter(|| v.validate(black_box(BAD_LUHN_LINE)))
    });

    group.finish();
}

/// Benchmark the primitives
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("luhn_16", |b| b.iter(|| luhn::validate(black_box(&VISA_DIGITS))));
    group.bench_function("detect_16", |b| {
        b.iter(|| detect_network(black_box(&VISA_DIGITS)))
    });
    group.bench_function("normalize_formatted", |b| {
        b.iter(|| normalize(black_box("4111-1111-1111-1111")))
    });

    group.finish();
}

/// Benchmark streaming throughput
fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let v = validator();

    for size in [100, 1_000, 10_000] {
        let lines: Vec<&str> = (0..size)
            .map(|i| if i % 4 == 0 { BAD_LUHN_LINE } else { VISA_LINE })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                lines
                    .iter()
                    .validate_records_with(&v)
                    .filter(|(_, verdict)| verdict.is_valid())
                    .count()
            })
        });
    }

    group.finish();
}

/// Benchmark a full batch run with zero delay
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let lines = vec![VISA_LINE; 1_000];
    let processor = BatchProcessor::with_validator(
        validator(),
        BatchConfig {
            seed: Some(1),
            ..BatchConfig::default()
        },
    )
    .unwrap();

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("1000_records", |b| {
        b.iter(|| runtime.block_on(processor.start(black_box(&lines), |_| {}, |_| {})))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_primitives,
    bench_stream,
    bench_batch
);
criterion_main!(benches);
