//! Benchmarks for base conversion and parsing.

use baseconv_core::{parse, Converter, Radix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Values with few, many, and interior-zero digits.
const VALUES: &[(&str, i64)] = &[
    ("small", 255),
    ("interior_zeros", 1_000_000_007),
    ("max", i64::MAX),
    ("min", i64::MIN),
];

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format");

    for base in [2u32, 10, 16, 36] {
        let conv = Converter::new(Radix::new(base).unwrap());
        for &(name, value) in VALUES {
            group.bench_with_input(
                BenchmarkId::new(format!("base{base}"), name),
                &value,
                |b, &v| b.iter(|| black_box(conv.format(black_box(v)))),
            );
        }
    }

    group.finish();
}

fn benchmark_write_to(c: &mut Criterion) {
    let conv = Converter::new(Radix::HEX).with_prefix("0x");
    let mut buf = Vec::with_capacity(64);

    c.bench_function("write_to_reused_buffer", |b| {
        b.iter(|| {
            buf.clear();
            conv.write_to(&mut buf, black_box(i64::MIN)).unwrap();
            black_box(buf.len())
        })
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let text = Converter::new(Radix::MAX).format(i64::MAX);

    c.bench_function("parse_base36_max", |b| {
        b.iter(|| {
            let value = parse(black_box(&text), Radix::MAX, "").unwrap();
            black_box(value)
        })
    });
}

criterion_group!(benches, benchmark_format, benchmark_write_to, benchmark_parse);
criterion_main!(benches);
