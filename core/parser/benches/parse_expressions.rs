use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mathexpr_parser::{parse, tokenize};
use std::hint::black_box;

/// Builds "(1+2)*(3+4)-..." style input with `terms` parenthesized groups.
fn build_expression(terms: usize) -> String {
    (0..terms)
        .map(|i| format!("({} + {}) * {}", i, i + 1, i % 7 + 1))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for terms in [1, 16, 256].iter() {
        let input = build_expression(*terms);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("tokenize", terms), &input, |b, input| {
            b.iter(|| tokenize(black_box(input)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("evaluate", terms), &input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap());
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let depth = 64;
    let input = format!("{}1{}", "(".repeat(depth), " + 1)".repeat(depth));

    c.bench_function("parse/nested_64", |b| {
        b.iter(|| parse(black_box(&input)).unwrap());
    });
}

criterion_group!(benches, bench_parse, bench_nesting);
criterion_main!(benches);
