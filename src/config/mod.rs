mod types;

pub use types::*;

use crate::{Error, Result};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const API_KEY_ENV: &str = "QWEN_API_KEY";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), applies the
/// `QWEN_API_KEY` override and validates the result.
pub async fn load() -> Result<Config> {
    load_with(
        env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from),
        Path::new(DEFAULT_CONFIG_PATH),
        env::var(API_KEY_ENV).ok(),
    )
    .await
}

/// Environment-free core of [`load`].
///
/// A missing `default_path` falls back to built-in defaults; a missing
/// `config_path` is an error.
pub async fn load_with(
    config_path: Option<PathBuf>,
    default_path: &Path,
    api_key: Option<String>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load_from_path(&path).await?,
        None if default_path.exists() => load_from_path(default_path).await?,
        None => {
            info!("No {} found, using built-in defaults", default_path.display());
            Config::default()
        }
    };

    config.apply_api_key_override(api_key);
    config.validate()?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Replaces the configured API key with `key` when it is set and non-empty.
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_ENV);
            self.upstream.api_key = key;
        }
    }

    /// Fails closed: there is no built-in API key to fall back to.
    pub fn validate(&self) -> Result<()> {
        let upstream = &self.upstream;

        if upstream.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "upstream API key is not set; provide {} or upstream.api_key",
                API_KEY_ENV
            )));
        }
        if upstream.endpoint.trim().is_empty() {
            return Err(Error::config("upstream.endpoint must not be empty"));
        }
        if upstream.model.trim().is_empty() {
            return Err(Error::config("upstream.model must not be empty"));
        }
        if self.server.max_body_bytes == 0 {
            return Err(Error::config("server.max_body_bytes must be greater than 0"));
        }
        if upstream.timeout_secs == 0 {
            return Err(Error::config("upstream.timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}
