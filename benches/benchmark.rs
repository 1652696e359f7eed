use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sexp_eval::{evaluate, Calculator};

fn nested_expression(depth: usize) -> String {
    let mut expr = "1".to_string();
    for i in 0..depth {
        let op = ["+", "-", "max", "min"][i % 4];
        expr = format!("({} {} {} 2)", op, expr, i);
    }
    expr
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate flat sum", |b| {
        b.iter(|| evaluate(black_box("(+ 1 2 3 4 5 6 7 8 9 10)")))
    });

    let calculator = Calculator::default();
    let nested = nested_expression(64);
    c.bench_function("evaluate nested 64", |b| {
        b.iter(|| calculator.evaluate(black_box(&nested)))
    });

    c.bench_function("parse nested 64", |b| {
        b.iter(|| calculator.parse(black_box(&nested)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
