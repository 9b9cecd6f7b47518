//! Benchmark for the arity dispatcher.
//!
//! Measures the specialized `Args` variants against the overflow path, and
//! bound functions whose combined argument count lands on either side of the
//! specialization bound.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fastfn::bind;
use fastfn::dispatch::{Args, Function, SPECIALIZED_ARITY, apply};
use fastfn::value::Value;
use std::hint::black_box;

fn count() -> Function {
    Function::new("count", |_, arguments| Ok(Value::from(arguments.len())))
}

fn numbers(length: usize) -> Vec<Value> {
    (0..length).map(Value::from).collect()
}

// =============================================================================
// Direct Dispatch Benchmarks
// =============================================================================

fn benchmark_apply_by_arity(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply_by_arity");
    let function = count();

    for arity in [0, 1, 2, 3, 4, 5, 8] {
        let arguments = numbers(arity);
        group.bench_with_input(BenchmarkId::new("arity", arity), &arguments, |bencher, arguments| {
            bencher.iter(|| black_box(apply(&function, &Value::Undefined, black_box(arguments))));
        });
    }

    group.finish();
}

fn benchmark_specialized_vs_overflow(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("specialized_vs_overflow");
    let function = count();
    let arguments = numbers(3);

    // Same three arguments carried two ways
    group.bench_function("three_specialized", |bencher| {
        bencher.iter(|| {
            black_box(function.call3(
                &Value::Undefined,
                &arguments[0],
                &arguments[1],
                &arguments[2],
            ))
        });
    });

    group.bench_function("three_overflow", |bencher| {
        bencher.iter(|| {
            let carried = Args::Overflow(arguments.clone().into());
            black_box(function.call(&Value::Undefined, &carried))
        });
    });

    group.finish();
}

// =============================================================================
// Bound Function Benchmarks
// =============================================================================

fn benchmark_bound_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bound_call");
    let function = count();

    for prefix_length in [1, SPECIALIZED_ARITY - 1, SPECIALIZED_ARITY + 1] {
        let bound = bind(&function, Value::Undefined, &numbers(prefix_length));
        let trailing = Value::from(0);
        group.bench_with_input(
            BenchmarkId::new("prefix_length", prefix_length),
            &prefix_length,
            |bencher, _| {
                bencher.iter(|| black_box(bound.call1(&Value::Undefined, black_box(&trailing))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_apply_by_arity,
    benchmark_specialized_vs_overflow,
    benchmark_bound_call
);

criterion_main!(benches);
