//! Benchmark for container combinator chains.
//!
//! Compares combinator pipelines against the equivalent hand-written `match`
//! code to check that the containers add no overhead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vessel::option::Optional;
use vessel::result::Outcome;

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    for input in [Optional::Present(42_i64), Optional::Absent] {
        let label = if input.is_present() { "present" } else { "absent" };

        group.bench_with_input(BenchmarkId::new("combinators", label), &input, |bencher, input| {
            bencher.iter(|| {
                black_box(*input)
                    .map(|x| x * 2)
                    .filter(|x| x % 3 == 0)
                    .and_then(|x| Optional::from(x.checked_add(1)))
                    .unwrap_or(0)
            });
        });

        group.bench_with_input(BenchmarkId::new("manual_match", label), &input, |bencher, input| {
            bencher.iter(|| match black_box(*input) {
                Optional::Present(x) => {
                    let doubled = x * 2;
                    if doubled % 3 == 0 {
                        doubled.checked_add(1).unwrap_or(0)
                    } else {
                        0
                    }
                }
                Optional::Absent => 0,
            });
        });
    }

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    let inputs: [(&str, Outcome<i64, String>); 2] = [
        ("success", Outcome::Success(42)),
        ("failure", Outcome::Failure("error".to_string())),
    ];

    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("combinators", label), &input, |bencher, input| {
            bencher.iter(|| {
                black_box(input.clone())
                    .map(|x| x + 1)
                    .and_then(|x| {
                        if x > 0 {
                            Outcome::Success(x * 2)
                        } else {
                            Outcome::Failure("negative".to_string())
                        }
                    })
                    .map_err(|error| error.len())
                    .unwrap_or_else(|length| i64::try_from(length).unwrap_or(i64::MAX))
            });
        });

        group.bench_with_input(BenchmarkId::new("manual_match", label), &input, |bencher, input| {
            bencher.iter(|| match black_box(input.clone()) {
                Outcome::Success(x) => {
                    let incremented = x + 1;
                    if incremented > 0 {
                        incremented * 2
                    } else {
                        i64::try_from("negative".len()).unwrap_or(i64::MAX)
                    }
                }
                Outcome::Failure(error) => i64::try_from(error.len()).unwrap_or(i64::MAX),
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_optional_chain, benchmark_outcome_chain);
criterion_main!(benches);
