//! Iterative FizzBuzz benchmark.

use std::fs;

use anyhow::{Context, Result};
use fizzbuzz::{Benchmark, Discard};
use fizzbuzz_bench::measure_passes;
use fizzbuzz_config::FizzBuzzConfig;
use tracing::info;

/// Runs 40,000 passes over `0..50` into the discarding sink.
///
/// Nothing is written to stdout. With `report.latency_json` configured the
/// passes are timed and the summary lands in that file.
pub fn run(config: &FizzBuzzConfig) -> Result<()> {
    let bench = Benchmark::default();

    let Some(path) = &config.report.latency_json else {
        bench.run(&mut Discard);
        return Ok(());
    };

    let tracker = measure_passes(&bench, &mut Discard);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, tracker.to_json("fizzbuzz_pass"))
        .with_context(|| format!("Failed to write latency report to {}", path.display()))?;

    info!(path = %path.display(), passes = tracker.count(), "wrote latency report");
    Ok(())
}
