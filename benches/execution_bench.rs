use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prefix_eval::{Parser, ResultParser, UnwindingParser};

/// Balanced program of the given nesting depth
fn program(depth: usize) -> String {
    if depth == 0 {
        return "7".to_string();
    }
    let inner = program(depth - 1);
    format!("(+ (* {} 3) (- {} 2))", inner, inner)
}

/// Same program with its final closing paren missing
fn broken_program(depth: usize) -> String {
    let mut source = program(depth);
    source.pop();
    source
}

fn parser_benchmark(c: &mut Criterion) {
    let ok = program(12);
    let err = broken_program(12);

    let results = ResultParser::new();
    let unwinding = UnwindingParser::new();

    c.bench_function("parser-unwinding-no-errors", |b| {
        b.iter(|| unwinding.execute(black_box(&ok)))
    });
    c.bench_function("parser-results-no-errors", |b| {
        b.iter(|| results.execute(black_box(&ok)))
    });
    c.bench_function("parser-unwinding-with-errors", |b| {
        b.iter(|| unwinding.execute(black_box(&err)))
    });
    c.bench_function("parser-results-with-errors", |b| {
        b.iter(|| results.execute(black_box(&err)))
    });
}

criterion_group!(benches, parser_benchmark);
criterion_main!(benches);
