//! Numeral conversion benchmarks.
//!
//! Measures the full `convert` pipeline (decode, tokenize, parse,
//! materialize) on typical literals and on long positional digit runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wen_numeral::convert;

/// Literals of the shapes a source file actually contains.
const TYPICAL: &[(&str, &str)] = &[
    ("ten", "十"),
    ("zero_fill", "一千零五"),
    ("grouped", "負三萬五千"),
    ("fraction", "三分五釐"),
    ("decimal", "一·二"),
    ("i32_max", "二十一億四千七百四十八萬三千六百四十七"),
    ("largest_unit", "一極"),
];

/// `n` positional digits cycling through `一…九`.
fn generate_digits(n: usize) -> String {
    const DIGITS: [char; 9] = ['一', '二', '三', '四', '五', '六', '七', '八', '九'];
    (0..n).map(|i| DIGITS[i % DIGITS.len()]).collect()
}

fn bench_typical(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/typical");

    for (name, text) in TYPICAL {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| convert(black_box(text)));
        });
    }

    group.finish();
}

/// Throughput on digit runs long enough to overflow into doubles.
fn bench_long_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert/digits/throughput");

    for len in [8, 19, 64, 256, 1024] {
        let text = generate_digits(len);
        let bytes = text.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| convert(black_box(text.as_str())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_typical, bench_long_digits);
criterion_main!(benches);
