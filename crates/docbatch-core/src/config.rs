use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::params::JobParameters;
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries per run (the initial attempt is free).
    pub max_retries: u32,
    /// Fixed backoff in seconds before each resubmission.
    pub backoff_secs: u64,
    /// Enclosing run timeout in seconds, independent of the retry loop.
    pub run_timeout_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            backoff_secs: 120,
            run_timeout_secs: 2 * 60 * 60,
        }
    }
}

/// Job-naming parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Deployment marker embedded in every job name. Bumped by operators on
    /// breaking changes to the job contract; never computed.
    pub version_tag: String,
    /// Base name used when the caller does not supply one.
    pub default_base: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            version_tag: "v1".to_string(),
            default_base: "docbatch".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/docbatch/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocbatchConfig {
    /// Default job parameters; caller overrides merge over these per run.
    #[serde(default)]
    pub defaults: JobParameters,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Job-naming parameters.
    #[serde(default)]
    pub naming: NamingConfig,
}

impl DocbatchConfig {
    /// Effective retry policy (config section or built-in defaults).
    pub fn retry_policy(&self) -> RetryPolicy {
        let retry = self.retry.clone().unwrap_or_default();
        RetryPolicy {
            max_retries: retry.max_retries,
            backoff: Duration::from_secs(retry.backoff_secs),
            run_timeout: Duration::from_secs(retry.run_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docbatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocbatchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocbatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DocbatchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
