use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::network::NetworkConfig;

pub mod cache;
pub mod network;

/// Environment lookup, swappable in tests
pub(crate) type Vars<'a> = dyn Fn(&str) -> Option<String> + 'a;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub cache: CacheConfig,
}

impl Config {
    /// Defaults overridden by `WORT_*` environment variables
    pub fn new() -> Self {
        Self::from_vars(&|name| env::var(name).ok())
    }

    pub(crate) fn from_vars(vars: &Vars<'_>) -> Self {
        Config {
            network: NetworkConfig::from_vars(vars),
            cache: CacheConfig::from_vars(vars),
        }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
