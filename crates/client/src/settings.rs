use std::time::Duration;

use serde::Deserialize;

use crate::{
    client::{Client, DEFAULT_TIMEOUT},
    error::Result,
};

const DEFAULT_CONFIG_PATH: &str = "config/groshi.toml";

/// Connection settings of a [`Client`].
///
/// Read from an optional TOML file and from `GROSHI_*` environment variables
/// (`GROSHI_BASE_URL`, `GROSHI_TOKEN`, `GROSHI_TIMEOUT_SECS`), the latter
/// taking precedence.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ClientConfig {
    /// Loads the configuration, `path` defaults to `config/groshi.toml`.
    /// A missing file is not an error.
    pub fn load(path: Option<&str>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](ClientConfig::load), reading `GROSHI_*` variables
    /// from `env` instead of the process environment when it is given.
    fn load_with_env(
        path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("GROSHI").source(env))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Client {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout());
        if let Some(token) = &config.token {
            builder = builder.token(token);
        }
        builder.build()
    }
}
