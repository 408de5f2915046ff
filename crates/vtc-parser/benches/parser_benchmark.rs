//! Benchmarks for vtc-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vtc_parser::{parse_timecode, recognize};

/// Sample inputs covering every recognized format
const SAMPLES: &[&str] = &[
    "01:00:00:00",
    "00:01:00;02",
    "-00:00:02:01",
    "5400+00",
    "00:59:59.9964",
    "24000/1001",
    "23.976",
    "86400",
];

fn bench_parse_timecode(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_timecode");

    group.bench_function("full", |b| {
        b.iter(|| parse_timecode(black_box("01:00:00:00")))
    });

    group.bench_function("drop_frame", |b| {
        b.iter(|| parse_timecode(black_box("00:01:00;02")))
    });

    group.bench_function("partial", |b| b.iter(|| parse_timecode(black_box("04"))));

    group.finish();
}

fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognize");

    group.throughput(Throughput::Elements(SAMPLES.len() as u64));
    group.bench_function("mixed_formats", |b| {
        b.iter(|| {
            for input in SAMPLES {
                black_box(recognize(black_box(input)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse_timecode, bench_recognize);
criterion_main!(benches);
