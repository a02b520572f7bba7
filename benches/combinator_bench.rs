//! Benchmark for wrapper call overhead.
//!
//! Compares calling a target directly against calling it through the
//! combinators, to show the cost each layer adds.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fntools::arguments;
use fntools::combinators::{after, ary, curry, once, over_args, partial, rearg};
use fntools::compose::pipe;
use fntools::function::Function;
use fntools::value::{FromValue, Value};

fn sum3() -> Function {
    Function::builder()
        .name("sum3")
        .parameter("a")
        .parameter("b")
        .parameter("c")
        .build(|bound| {
            let total = bound
                .into_iter()
                .map(i64::from_value)
                .sum::<Result<i64, _>>()?;
            Ok(Value::Integer(total))
        })
}

fn increment() -> Function {
    Function::opaque(|arguments| {
        let value = i64::from_value(arguments.into_iter().next().unwrap_or_default())?;
        Ok(Value::Integer(value + 1))
    })
}

// =============================================================================
// Single Wrapper Benchmark
// =============================================================================

fn benchmark_single_wrapper(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("single_wrapper");
    let target = sum3();

    let wrappers = [
        ("direct", target.clone()),
        ("ary", ary(&target, 3)),
        ("after", after(0, &target)),
        ("once", once(&target)),
        ("rearg", rearg(&target, vec![2, 1, 0])),
        ("partial", partial(&target, vec![Value::Integer(1)])),
        (
            "over_args",
            over_args(&target, vec![increment(), increment(), increment()])
                .expect("sum3 declares three parameters"),
        ),
    ];

    for (name, wrapper) in &wrappers {
        let supplied = if *name == "partial" { 2 } else { 3 };
        group.bench_with_input(BenchmarkId::new(*name, supplied), wrapper, |bencher, wrapper| {
            bencher.iter(|| {
                let arguments = if supplied == 2 {
                    arguments![2, 3]
                } else {
                    arguments![1, 2, 3]
                };
                black_box(wrapper.call(black_box(arguments)))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Curry Benchmark
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");
    let curried = curry(&sum3(), Vec::new()).expect("sum3 declares a signature");

    group.bench_function("all_at_once", |bencher| {
        bencher.iter(|| black_box(curried.call(arguments![1, 2, 3])));
    });

    group.bench_function("one_at_a_time", |bencher| {
        bencher.iter(|| {
            let step = curried.call(arguments![1]).expect("partial call succeeds");
            let step = step
                .as_function()
                .expect("curried step")
                .call(arguments![2])
                .expect("partial call succeeds");
            black_box(step.as_function().expect("curried step").call(arguments![3]))
        });
    });

    group.finish();
}

// =============================================================================
// Pipe Benchmark
// =============================================================================

fn benchmark_pipe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe");

    for length in [1, 4, 16] {
        let piped = pipe((0..length).map(|_| increment()));
        group.bench_with_input(BenchmarkId::new("dynamic", length), &piped, |bencher, piped| {
            bencher.iter(|| black_box(piped.call(arguments![0])));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_single_wrapper, benchmark_curry, benchmark_pipe);

criterion_main!(benches);
