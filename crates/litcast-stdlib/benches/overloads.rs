//! Cost of literal resolution: raw registry calls against wrapped ones.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use litcast_core::Value;
use litcast_runtime::{augment, FuncMap};

fn registries() -> (FuncMap, FuncMap) {
    let mut base = FuncMap::new();
    litcast_stdlib::register_all(&mut base);
    let aug = augment(&base).expect("stdlib entries wrap");
    (base, aug)
}

fn wrapped_vs_raw(c: &mut Criterion) {
    let (base, aug) = registries();
    let mut group = c.benchmark_group("wrapped_vs_raw");

    let cases: [(&str, Vec<Value>); 3] = [
        ("add1", vec![Value::Integer(41)]),
        ("add", (1..=8).map(Value::Integer).collect()),
        ("abbrev", vec![Value::Integer(8), Value::string("the quick brown fox")]),
    ];
    for (name, args) in &cases {
        group.bench_with_input(BenchmarkId::new("raw", name), args, |b, args| {
            b.iter(|| base.call(name, black_box(args)))
        });
        group.bench_with_input(BenchmarkId::new("wrapped", name), args, |b, args| {
            b.iter(|| aug.call(name, black_box(args)))
        });
    }
    group.finish();
}

fn literal_resolution(c: &mut Criterion) {
    let (_, aug) = registries();
    let mut group = c.benchmark_group("literal_resolution");
    let ints: Vec<Value> = (1..=8).map(|n| Value::literal(n.to_string())).collect();
    let mixed = vec![Value::literal("3"), Value::literal("3.0")];
    group.bench_function("add_literals", |b| b.iter(|| aug.call("add", black_box(&ints))));
    group.bench_function("eq_mixed", |b| b.iter(|| aug.call("eq", black_box(&mixed))));
    group.finish();
}

criterion_group!(overload_benches, wrapped_vs_raw, literal_resolution);
criterion_main!(overload_benches);
