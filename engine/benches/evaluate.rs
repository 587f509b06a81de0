//! Benchmarks for expression evaluation.
//!
//! Includes:
//! - Plain arithmetic and function calls
//! - Each calculus form, whose body is re-evaluated per sample

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use scicalc_engine::{evaluate, EngineConfig, EvalContext};

/// Benchmark expressions without calculus forms.
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let config = EngineConfig::default();
    let ctx = EvalContext::new(&config, 1.5);

    let cases = [
        ("precedence", "3+4*2-(1+2)/3"),
        ("functions", "sqrt(16)+sin(30)*cos(60)+ln(e)"),
        ("variable", "x^3-2*x^2+x-1"),
        ("combinatorics", "ncr(20, 10)+fact(12)"),
    ];

    for (name, expression) in cases {
        group.bench_with_input(BenchmarkId::new(name, expression), &expression, |b, expr| {
            b.iter(|| black_box(evaluate(black_box(expr), &ctx)))
        });
    }

    group.finish();
}

/// Benchmark each calculus form.
fn bench_calculus(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculus");
    let config = EngineConfig::default();
    let ctx = EvalContext::new(&config, 0.0);

    let cases = [
        ("diff", "diff(x^3+sin(x), 1)"),
        ("int", "int(x^2*exp(x), 0, 1)"),
        ("sum", "sum(1/x^2, 1, 1000)"),
        ("lim", "lim(sin(x)/x, 0)"),
    ];

    for (name, expression) in cases {
        group.bench_with_input(BenchmarkId::new(name, expression), &expression, |b, expr| {
            b.iter(|| black_box(evaluate(black_box(expr), &ctx)))
        });
    }

    group.finish();
}

/// Benchmark integral cost against the Simpson subinterval count.
fn bench_integral_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("integral_resolution");

    for n in [100u32, 1000, 10000] {
        let config = EngineConfig::default().with_integral_subintervals(n);
        let ctx = EvalContext::new(&config, 0.0);

        group.bench_with_input(BenchmarkId::new("int_sin", n), &n, |b, _| {
            b.iter(|| black_box(evaluate("int(sin(x), 0, pi)", &ctx)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_calculus, bench_integral_resolution);
criterion_main!(benches);
