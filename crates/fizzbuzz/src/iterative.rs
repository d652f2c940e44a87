//! Iterative benchmark driver.
//!
//! A pass classifies `0..count` and hands every term to a sink. A
//! [`Benchmark`] repeats the pass a fixed number of times so the cost of the
//! classification can be observed from outside (a profiler, `time`, ...).
//! Nothing is cached between passes.

use tracing::debug;

use crate::{Sink, classify};

/// Inner bound used by the `fizzbuzz-bench` binary.
pub const BENCHMARK_COUNT: i64 = 50;

/// Outer repetition count used by the `fizzbuzz-bench` binary.
pub const BENCHMARK_REPETITIONS: u64 = 40_000;

/// Emits the classification of every index in `0..count`.
///
/// Starts at zero, so the first term is always `FizzBuzz`.
pub fn fizz_buzz_iterative<S>(count: i64, sink: &mut S)
where
    S: Sink + ?Sized,
{
    for i in 0..count {
        sink.emit(&classify(i).render());
    }
}

/// Calls `f` exactly `n` times.
pub fn do_n_times(n: u64, mut f: impl FnMut()) {
    for _ in 0..n {
        f();
    }
}

/// A repeated iterative pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    /// Exclusive upper bound of each pass.
    pub count: i64,
    /// Number of passes.
    pub repetitions: u64,
}

impl Benchmark {
    pub fn new(count: i64, repetitions: u64) -> Self {
        Self { count, repetitions }
    }

    /// Runs every pass into `sink`.
    pub fn run<S>(&self, sink: &mut S)
    where
        S: Sink + ?Sized,
    {
        let count = self.count;
        do_n_times(self.repetitions, || fizz_buzz_iterative(count, sink));

        debug!(
            count,
            repetitions = self.repetitions,
            classifications = self.classifications(),
            "benchmark complete"
        );
    }

    /// Number of `classify` calls a full [`Benchmark::run`] makes.
    pub fn classifications(&self) -> u64 {
        let per_pass = u64::try_from(self.count).unwrap_or(0);
        per_pass.saturating_mul(self.repetitions)
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(BENCHMARK_COUNT, BENCHMARK_REPETITIONS)
    }
}
