mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const PORT_ENV: &str = "PORT";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => parse(&config_str)?,
        // Only the implicit default file is optional.
        Err(e) if e.kind() == ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using built-in defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.apply_env_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

impl Config {
    /// Applies environment overrides on top of the file configuration.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self.provider.api_key = Some(api_key);
        }

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.provider.base_url = base_url;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| {
                Error::config(format!("Invalid {} value: '{}'", PORT_ENV, port))
            })?;
        }

        Ok(())
    }
}
