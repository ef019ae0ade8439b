//! Layered configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `<platform config dir>/config.toml` (optional)
//! 3. `--config <file>`
//! 4. `HHN__<SECTION>__<KEY>` environment variables, e.g.
//!    `HHN__CONTAINER__FRAMEWORK=singularity`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use hhn_core::config::ContainerSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "HHN";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Logging settings (the `[logging]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `pretty` or `json`
    pub format: String,
    /// Used when `RUST_LOG` is unset
    pub filter: String,
    /// Also write logs to `<dir>/hhn.log`
    pub dir: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            filter: "hhn=info".to_string(),
            dir: None,
        }
    }
}

impl LoggingSettings {
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.dir
            .as_deref()
            .map(|d| PathBuf::from(shellexpand::tilde(d).into_owned()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub container: ContainerSettings,
    pub logging: LoggingSettings,
}

/// Platform default config file, e.g. `~/.config/hhn-adapter/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hhn", "hhn-adapter")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// `HHN__<SECTION>__<KEY>` variables from the process environment
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

pub fn load(explicit: Option<&Path>) -> Result<AdapterConfig> {
    load_with_env(explicit, environment())
}

fn load_with_env(explicit: Option<&Path>, env: Environment) -> Result<AdapterConfig> {
    let mut builder = Config::builder();

    if let Some(path) = default_config_path() {
        builder = builder.add_source(File::from(path).required(false));
    }

    if let Some(path) = explicit {
        let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(env);

    builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}
