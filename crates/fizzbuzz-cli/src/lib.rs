//! Shared plumbing for the `fizzbuzz-recursive` and `fizzbuzz-bench` binaries.

pub mod commands;

use fizzbuzz_config::FizzBuzzConfig;
use tracing_subscriber::EnvFilter;

/// Loads configuration and installs the stderr logger.
///
/// A configuration that fails to load falls back to defaults with a warning;
/// neither program has anything in it that is worth refusing to start over.
pub fn bootstrap() -> FizzBuzzConfig {
    match FizzBuzzConfig::load() {
        Ok(config) => {
            init_logging(&config.logging.filter);
            config
        }
        Err(e) => {
            let config = FizzBuzzConfig::default();
            init_logging(&config.logging.filter);
            tracing::warn!("Ignoring configuration: {e:#}");
            config
        }
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
