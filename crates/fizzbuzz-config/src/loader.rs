//! Configuration loader with multi-source merging

use crate::{FizzBuzzConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "FIZZBUZZ".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "FIZZBUZZ")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/fizzbuzz/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<FizzBuzzConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = FizzBuzzConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/fizzbuzz/config.toml)
        if self.include_user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (fizzbuzz.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (fizzbuzz.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (FIZZBUZZ_LOGGING__FILTER, FIZZBUZZ_REPORT__LATENCY_JSON)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut fizzbuzz_config: FizzBuzzConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        fizzbuzz_config
            .validate()
            .context("Configuration failed validation")?;
        fizzbuzz_config.resolve_paths(&self.project_dir);

        Ok(fizzbuzz_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> FizzBuzzConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn loader(project_dir: &Path) -> ConfigLoader {
        // A prefix no real environment sets, so tests see only files.
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("FIZZBUZZ_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path()).load().expect("Failed to load config");

        assert_eq!(config.logging.filter, "warn");
        assert!(config.report.latency_json.is_none());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[logging]
filter = "fizzbuzz=debug"

[report]
latency_json = "latency.json"
"#;
        fs::write(project_dir.join("fizzbuzz.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.logging.filter, "fizzbuzz=debug");
        assert_eq!(
            config.report.latency_json,
            Some(project_dir.join("latency.json"))
        );
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("fizzbuzz.toml"),
            r#"
[logging]
filter = "info"
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("fizzbuzz.local.toml"),
            r#"
[logging]
filter = "trace"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("fizzbuzz.toml"),
            "[logging]\nfilter = \"\"\n",
        )
        .expect("Failed to write config");

        assert!(loader(project_dir).load().is_err());
        assert_eq!(loader(project_dir).load_or_default().logging.filter, "warn");
    }

    // The environment layer is covered by the fizzbuzz-cli integration tests,
    // which set FIZZBUZZ_* on a child process instead of this one.
}
