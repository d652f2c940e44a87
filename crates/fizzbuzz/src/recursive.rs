//! Recursive driver with timing.
//!
//! Walks `RECURSIVE_START..=max` by self-recursion, one index per frame, and
//! measures the wall-clock time of the whole walk including emission.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{DriverError, Sink, classify};

/// First index the recursive driver classifies.
pub const RECURSIVE_START: i64 = 1;

/// Bound used by the `fizzbuzz-recursive` binary.
pub const RECURSIVE_MAX: i64 = 30;

/// Largest `max` the driver accepts.
///
/// Every index costs one stack frame and tail calls are not guaranteed to be
/// eliminated, so the depth is capped well below what a 2 MiB thread stack
/// holds in an unoptimized build.
pub const MAX_RECURSION_BOUND: i64 = 10_000;

/// Outcome of one recursive pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveRun {
    /// Number of terms handed to the sink.
    pub emitted: u64,
    /// Wall-clock time of the whole recursion.
    pub elapsed: Duration,
}

/// Emits the classification of every index in `1..=max`, in order.
///
/// A `max` below 1 emits nothing but is still timed. Returns
/// [`DriverError::RecursionTooDeep`] without emitting anything when `max`
/// exceeds [`MAX_RECURSION_BOUND`].
pub fn fizz_buzz_recursive<S>(max: i64, sink: &mut S) -> Result<RecursiveRun, DriverError>
where
    S: Sink + ?Sized,
{
    if max > MAX_RECURSION_BOUND {
        return Err(DriverError::RecursionTooDeep {
            max,
            cap: MAX_RECURSION_BOUND,
        });
    }

    let start = Instant::now();
    let emitted = step(max, RECURSIVE_START, sink);
    let elapsed = start.elapsed();

    debug!(
        max,
        emitted,
        elapsed_us = elapsed.as_micros() as u64,
        "recursive pass complete"
    );

    Ok(RecursiveRun { emitted, elapsed })
}

fn step<S>(max: i64, i: i64, sink: &mut S) -> u64
where
    S: Sink + ?Sized,
{
    if i > max {
        return 0;
    }
    sink.emit(&classify(i).render());
    1 + step(max, i + 1, sink)
}

/// Formats `elapsed` as microseconds with a `µs` suffix, e.g. `"41.917µs"`.
///
/// `f64`'s `Display` never switches to exponent notation, so the result is
/// always plain digits with an optional fractional part.
pub fn format_elapsed_micros(elapsed: Duration) -> String {
    let micros = elapsed.as_nanos() as f64 / 1_000.0;
    format!("{micros}µs")
}
