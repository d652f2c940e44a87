//! # fizzbuzz: classifier and drivers
//!
//! This crate contains the single FizzBuzz rule and the two ways it is driven:
//! - Classification ([`classify`], [`Classification`])
//! - Output sinks ([`Sink`], [`Discard`], [`LineWriter`], [`Collect`], [`Counting`])
//! - Recursive driver with timing ([`fizz_buzz_recursive`], [`format_elapsed_micros`])
//! - Iterative benchmark driver ([`fizz_buzz_iterative`], [`do_n_times`], [`Benchmark`])
//!
//! ```
//! use fizzbuzz::{Collect, fizz_buzz_recursive};
//!
//! let mut out = Collect::default();
//! let run = fizz_buzz_recursive(5, &mut out).unwrap();
//! assert_eq!(out.terms(), ["1", "2", "Fizz", "4", "Buzz"]);
//! assert_eq!(run.emitted, 5);
//! ```

use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use serde::{Serialize, Serializer};

mod error;
pub mod iterative;
pub mod recursive;
pub mod sink;

pub use error::DriverError;
pub use iterative::{
    BENCHMARK_COUNT, BENCHMARK_REPETITIONS, Benchmark, do_n_times, fizz_buzz_iterative,
};
pub use recursive::{
    MAX_RECURSION_BOUND, RECURSIVE_MAX, RECURSIVE_START, RecursiveRun, fizz_buzz_recursive,
    format_elapsed_micros,
};
pub use sink::{Collect, Counting, Discard, LineWriter, Sink};


// ============================================================================
// Classification
// ============================================================================

/// One of the four output forms of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Divisible by both 3 and 5.
    FizzBuzz,
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by neither; printed as its decimal numeral.
    Number(i64),
}

impl Classification {
    /// Returns the textual output form.
    ///
    /// The three fixed tokens are borrowed; only numerals allocate.
    pub fn render(&self) -> Cow<'static, str> {
        match self {
            Self::FizzBuzz => Cow::Borrowed("FizzBuzz"),
            Self::Fizz => Cow::Borrowed("Fizz"),
            Self::Buzz => Cow::Borrowed("Buzz"),
            Self::Number(i) => Cow::Owned(i.to_string()),
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{i}"),
            other => f.write_str(&other.render()),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

/// Classifies `i` by divisibility by 3 and 5.
///
/// Total over `i64`. The combined check comes first so multiples of 15 never
/// yield a lone `Fizz` or `Buzz`.
///
/// ```
/// use fizzbuzz::{Classification, classify};
///
/// assert_eq!(classify(0), Classification::FizzBuzz);
/// assert_eq!(classify(9), Classification::Fizz);
/// assert_eq!(classify(-10), Classification::Buzz);
/// assert_eq!(classify(7), Classification::Number(7));
/// ```
#[inline]
pub fn classify(i: i64) -> Classification {
    let three = i % 3 == 0;
    let five = i % 5 == 0;

    match (three, five) {
        (true, true) => Classification::FizzBuzz,
        (true, false) => Classification::Fizz,
        (false, true) => Classification::Buzz,
        (false, false) => Classification::Number(i),
    }
}
