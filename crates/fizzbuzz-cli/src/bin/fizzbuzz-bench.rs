//! Repeats an iterative FizzBuzz pass 40,000 times with output discarded.

use anyhow::Result;
use clap::Parser;

/// Classifies 0..50 forty thousand times, printing nothing.
#[derive(Parser)]
#[command(name = "fizzbuzz-bench")]
#[command(author, version, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    let config = fizzbuzz_cli::bootstrap();

    fizzbuzz_cli::commands::bench::run(&config)
}
