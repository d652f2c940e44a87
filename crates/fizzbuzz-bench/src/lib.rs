//! # fizzbuzz-bench: latency tracking for the fizzbuzz drivers
//!
//! The benchmark driver itself reports nothing. This crate adds the optional
//! measurement side: per-pass latencies recorded into an HDR histogram, and
//! Criterion benchmarks for both drivers.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench -p fizzbuzz-bench
//!
//! # Save baseline for comparison
//! cargo bench -p fizzbuzz-bench --bench drivers -- --save-baseline main
//! ```

#![allow(clippy::cast_precision_loss)] // Latency stats use f64 for percentile calculations

use std::time::Instant;

use fizzbuzz::{Benchmark, Sink, fizz_buzz_iterative};
use hdrhistogram::Histogram;
use tracing::debug;

/// Tracks latency percentiles for operations.
#[derive(Debug)]
pub struct LatencyTracker {
    histogram: Histogram<u64>,
}

impl LatencyTracker {
    /// Creates a new latency tracker with 3 significant digits.
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(3).expect("3 significant digits is a valid histogram config"),
        }
    }

    /// Records a latency measurement in nanoseconds.
    pub fn record(&mut self, latency_ns: u64) {
        self.histogram.record(latency_ns).ok();
    }

    /// Returns the total number of recorded samples.
    pub fn count(&self) -> u64 {
        self.histogram.len()
    }

    pub fn p50(&self) -> u64 {
        self.histogram.value_at_quantile(0.50)
    }

    pub fn p95(&self) -> u64 {
        self.histogram.value_at_quantile(0.95)
    }

    pub fn p99(&self) -> u64 {
        self.histogram.value_at_quantile(0.99)
    }

    pub fn p999(&self) -> u64 {
        self.histogram.value_at_quantile(0.999)
    }

    pub fn max(&self) -> u64 {
        self.histogram.max()
    }

    pub fn mean(&self) -> f64 {
        self.histogram.mean()
    }

    pub fn min(&self) -> u64 {
        self.histogram.min()
    }

    /// Exports latency statistics as JSON.
    pub fn to_json(&self, operation: &str) -> String {
        serde_json::json!({
            "operation": operation,
            "count": self.count(),
            "min_ns": self.min(),
            "p50_ns": self.p50(),
            "p95_ns": self.p95(),
            "p99_ns": self.p99(),
            "p999_ns": self.p999(),
            "max_ns": self.max(),
            "mean_ns": self.mean(),
        })
        .to_string()
    }
}

impl Default for LatencyTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs every pass of `benchmark` into `sink`, timing each pass.
///
/// Does the same work as [`Benchmark::run`]; the clock reads sit between
/// passes, never inside one.
pub fn measure_passes<S>(benchmark: &Benchmark, sink: &mut S) -> LatencyTracker
where
    S: Sink + ?Sized,
{
    let mut tracker = LatencyTracker::new();
    for _ in 0..benchmark.repetitions {
        let start = Instant::now();
        fizz_buzz_iterative(benchmark.count, sink);
        tracker.record(start.elapsed().as_nanos() as u64);
    }

    debug!(
        passes = tracker.count(),
        p50_ns = tracker.p50(),
        max_ns = tracker.max(),
        "measured benchmark passes"
    );

    tracker
}

#[cfg(test)]
mod tests {
    use super::*;
    use fizzbuzz::{Counting, Discard};

    #[test]
    fn test_latency_tracker() {
        let mut tracker = LatencyTracker::new();

        for i in 1..=100 {
            tracker.record(i * 1000);
        }

        assert!(tracker.p50() > 0);
        assert!(tracker.p99() > tracker.p50());
        assert!(tracker.max() >= tracker.p999());
    }

    #[test]
    fn test_latency_statistics() {
        let mut tracker = LatencyTracker::new();

        tracker.record(1000);
        tracker.record(2000);
        tracker.record(3000);
        tracker.record(10000);

        assert!((tracker.mean() - 4000.0).abs() < 500.0);
        assert!(tracker.max() >= 10000);
        assert!(tracker.min() <= 1000);
    }

    #[test]
    fn test_json_export() {
        let mut tracker = LatencyTracker::new();
        tracker.record(1000);
        tracker.record(5000);
        tracker.record(10000);

        let json = tracker.to_json("fizzbuzz_pass");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["operation"], "fizzbuzz_pass");
        assert_eq!(parsed["count"], 3);
        assert!(parsed["max_ns"].as_u64().unwrap() >= 10000);
    }

    #[test]
    fn measure_passes_records_one_sample_per_pass() {
        let bench = Benchmark::new(50, 250);
        let tracker = measure_passes(&bench, &mut Discard);
        assert_eq!(tracker.count(), 250);
    }

    #[test]
    fn measure_passes_does_the_same_work_as_run() {
        let bench = Benchmark::new(50, 40);

        let mut measured = Counting::default();
        measure_passes(&bench, &mut measured);

        let mut plain = Counting::default();
        bench.run(&mut plain);

        assert_eq!(measured.count(), plain.count());
        assert_eq!(measured.count(), bench.classifications());
    }
}
