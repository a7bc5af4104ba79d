use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Vars;

fn default_enabled() -> bool {
    true
}

/// Platform cache directory, `.cache` when the platform has none
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("wort"))
        .unwrap_or_else(|| PathBuf::from(".cache"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Downloaded pages, one file per URL
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            dir: default_cache_dir(),
        }
    }
}

impl CacheConfig {
    pub(crate) fn from_vars(vars: &Vars<'_>) -> Self {
        let enabled = vars("WORT_CACHE_ENABLED")
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_enabled);

        let dir = vars("WORT_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);

        Self { enabled, dir }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
