//! Explainer endpoint configuration.
//!
//! Loaded once by the host application (usually from `config/help.yaml`)
//! and passed by reference wherever a help URL is derived.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/help.yaml";

const DEFAULT_HOST: &str = "https://taxon.dev";
const DEFAULT_PATH: &str = "/explain";

/// Errors that can occur while loading a help configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read help config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse help config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Where the explainer service lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Scheme and authority, e.g. `https://taxon.dev`
    #[serde(default = "default_host")]
    pub host: String,

    /// Path prefix placed before the `/0x<code>` segment
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            path: default_path(),
        }
    }
}

impl HelpConfig {
    /// Create a config from a host and a path prefix
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the path prefix
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Parse a config from YAML content; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), host = %config.host, "loaded help config");
        Ok(config)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_PATH`] when it
    /// exists, else fall back to the built-in defaults.
    pub fn resolve(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// The explainer endpoint for an exception code
    pub fn endpoint(&self, code: u32) -> String {
        format!("{}{}/0x{:x}", self.host, self.path, code)
    }
}
