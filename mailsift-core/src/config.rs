//! Configuration management for mailsift.
//!
//! Configuration is layered: defaults, then the global config file, then a
//! local `config.toml` in the working directory, then a CLI-specified file,
//! then `MAILSIFT_*` environment variables.

use std::fs;
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::AppPaths;

const ENV_PREFIX: &str = "MAILSIFT";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sender address stamped on every composed message.
    pub sender: String,
    /// Classification service settings.
    pub classifier: ClassifierConfig,
    /// UI behavior settings.
    pub ui: UiConfig,
}

/// Classification service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Base URL of the classification service.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay before auto-navigating to the filed folder, in milliseconds.
    pub navigate_delay_ms: u64,
    /// Artificial delay applied when the local fallback classifier runs,
    /// in milliseconds.
    pub fallback_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sender: "me@example.com".to_string(),
            classifier: ClassifierConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8002".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            navigate_delay_ms: 1200,
            fallback_delay_ms: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the discovered paths, layering files and
    /// environment variables over the defaults.
    pub fn load(paths: &AppPaths) -> Result<Self> {
        let mut builder = default_builder()?;

        if paths.global_config.exists() {
            builder = builder.add_source(
                File::from(paths.global_config.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if paths.local_config.exists() && paths.local_config != paths.global_config {
            builder = builder.add_source(
                File::from(paths.local_config.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if let Some(cli_config) = &paths.cli_config {
            builder = builder.add_source(
                File::from(cli_config.clone())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(env_source());

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    /// Write a commented default config file to `path`, creating parent
    /// directories as needed. Does nothing if the file already exists.
    pub fn ensure_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::write_default(path)?;
        Ok(true)
    }

    /// Write a commented default config file to `path`, creating parent
    /// directories as needed.
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| crate::error::Error::Config(format!("serializing defaults: {e}")))?;
        let contents = format!(
            "# mailsift configuration\n# Values may be overridden by MAILSIFT_* environment variables,\n# e.g. MAILSIFT_CLASSIFIER__URL=http://localhost:9000\n\n{body}"
        );
        fs::write(path, contents)?;
        Ok(())
    }

    /// The environment variable prefix used for overrides.
    pub fn env_prefix() -> &'static str {
        ENV_PREFIX
    }
}

fn default_builder() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("sender", "me@example.com")?
        .set_default("classifier.url", "http://127.0.0.1:8002")?
        .set_default("classifier.timeout_secs", 10)?
        .set_default("ui.navigate_delay_ms", 1200)?
        .set_default("ui.fallback_delay_ms", 0)?)
}

// The prefix separator stays a single underscore so overrides read
// MAILSIFT_SENDER and MAILSIFT_CLASSIFIER__URL; "__" only separates
// nested keys.
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
