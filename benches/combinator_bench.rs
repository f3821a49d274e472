//! Benchmark for the point-free combinators.
//!
//! Measures the overhead of compose!, fork, curry! and the runtime Curried
//! against the equivalent hand-written code.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pointfree::compose::fork;
use pointfree::curry::{Application, curry};
use pointfree::list::{divide, size, sum};
use std::hint::black_box;

// =============================================================================
// compose! Benchmarks
// =============================================================================

fn benchmark_compose(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose");

    let add_one = |x: i64| x + 1;
    let double = |x: i64| x * 2;
    let square = |x: i64| x * x;

    group.bench_function("direct", |bencher| {
        bencher.iter(|| add_one(double(square(black_box(7)))));
    });

    let composed = pointfree::compose!(add_one, double, square);
    group.bench_function("compose_three", |bencher| {
        bencher.iter(|| composed(black_box(7)));
    });

    group.finish();
}

// =============================================================================
// fork Benchmarks
// =============================================================================

fn benchmark_fork_average(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fork_average");

    for length in [10, 100, 1000] {
        let values: Vec<f64> = (0..length).map(f64::from).collect();

        group.bench_with_input(BenchmarkId::new("direct", length), &values, |bencher, values| {
            bencher.iter(|| {
                let values = black_box(values.clone());
                #[allow(clippy::cast_precision_loss)]
                let count = values.len() as f64;
                values.iter().sum::<f64>() / count
            });
        });

        let average = fork(divide, sum, size);
        group.bench_with_input(BenchmarkId::new("fork", length), &values, |bencher, values| {
            bencher.iter(|| average(black_box(values.clone())));
        });
    }

    group.finish();
}

// =============================================================================
// curry Benchmarks
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");

    let add_three = pointfree::curry!(|a: i64, b: i64, c: i64| a + b + c);
    group.bench_function("macro_saturate", |bencher| {
        bencher.iter(|| add_three(black_box(1))(black_box(2))(black_box(3)));
    });

    let runtime = curry(3, |numbers: Vec<i64>| numbers.iter().sum::<i64>());
    group.bench_function("runtime_single_batch", |bencher| {
        bencher.iter(|| runtime.apply(black_box([1, 2, 3])));
    });

    group.bench_function("runtime_three_batches", |bencher| {
        bencher.iter(|| {
            let mut application = Application::Partial(runtime.clone());
            for argument in black_box([1, 2, 3]) {
                application = match application {
                    Application::Partial(curried) => curried.call(argument).ok()?,
                    Application::Complete(_) => return None,
                };
            }
            application.into_complete()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compose,
    benchmark_fork_average,
    benchmark_curry
);

criterion_main!(benches);
