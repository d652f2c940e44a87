//! Prints FizzBuzz for 1 through 30 by recursion, then the elapsed time.

use anyhow::Result;
use clap::Parser;

/// FizzBuzz for 1..=30 by self-recursion, followed by the elapsed time in µs.
#[derive(Parser)]
#[command(name = "fizzbuzz-recursive")]
#[command(author, version, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    let _config = fizzbuzz_cli::bootstrap();

    fizzbuzz_cli::commands::recursive::run()
}
