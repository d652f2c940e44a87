//! Configuration management for the fizzbuzz binaries
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (FIZZBUZZ_* prefix, highest precedence)
//! 2. fizzbuzz.local.toml (gitignored, local overrides)
//! 3. fizzbuzz.toml (project config)
//! 4. ~/.config/fizzbuzz/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! Only ambient concerns live here. The drivers' bounds and repetition
//! counts are constants in the `fizzbuzz` crate and are not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FizzBuzzConfig {
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where `fizzbuzz-bench` writes its per-pass latency summary, if anywhere.
    pub latency_json: Option<PathBuf>,
}

impl FizzBuzzConfig {
    /// Load configuration from default locations
    pub fn load() -> anyhow::Result<Self> {
        ConfigLoader::new().load()
    }

    /// Parse a single TOML file, without merging any other source
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the binaries cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        if let Some(path) = &self.report.latency_json {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "report.latency_json must not be an empty path".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        if let Some(path) = &mut self.report.latency_json {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
