//! Server configuration.

use crate::composer::ComposerConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://giclub.online";

/// Address the server binds to by default.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Environment variables consulted for the base URL, in order.
pub const BASE_URL_VARS: [&str; 2] = ["APP_URL", "NEXT_PUBLIC_APP_URL"];

/// Configuration of the download service and its server.
///
/// Missing fields in a JSON file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Origin used to build referral links
    pub base_url: String,
    /// Request worker threads
    pub workers: usize,
    /// Flate-compress content streams
    pub compress: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            workers: num_cpus::get().max(1),
            compress: false,
        }
    }
}

impl ServiceConfig {
    /// Override the base URL with the first non-blank variable of
    /// [`BASE_URL_VARS`] found through `lookup`. Blank or missing values
    /// leave the current base URL in place.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = BASE_URL_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
        {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Load a JSON configuration file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the number of worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Enable or disable compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Check values that would make the server unusable.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::Config("workers must be at least 1".to_string()));
        }
        if self.bind.trim().is_empty() {
            return Err(Error::Config("bind address is empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base URL is empty".to_string()));
        }
        Ok(())
    }

    /// Composer settings derived from this configuration.
    pub fn composer_config(&self) -> ComposerConfig {
        ComposerConfig::default().with_compress(self.compress)
    }
}
