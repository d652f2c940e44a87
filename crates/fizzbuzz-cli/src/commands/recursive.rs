//! Recursive FizzBuzz with timing.

use std::io::{self, Write};

use anyhow::{Context, Result};
use fizzbuzz::{LineWriter, RECURSIVE_MAX, fizz_buzz_recursive, format_elapsed_micros};

/// Prints `1..=30` followed by the elapsed time on stdout.
pub fn run() -> Result<()> {
    run_to(io::stdout().lock())
}

/// Same as [`run`], writing to `writer`.
pub fn run_to<W: Write>(writer: W) -> Result<()> {
    let mut out = LineWriter::new(writer);

    let run = fizz_buzz_recursive(RECURSIVE_MAX, &mut out)?;
    out.write_line(&format_elapsed_micros(run.elapsed));

    out.finish().context("Failed to write FizzBuzz output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_thirty_terms_and_a_timing_line() {
        let mut buf = Vec::new();
        run_to(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 31);
        assert_eq!(&lines[..5], ["1", "2", "Fizz", "4", "Buzz"]);
        assert_eq!(lines[14], "FizzBuzz");
        assert!(lines[30].ends_with("µs"));
    }
}
