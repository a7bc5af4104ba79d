use serde::{Deserialize, Serialize};

use crate::Vars;

pub const DEFAULT_BASE_URL: &str = "https://www.verbformen.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("wort/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Site root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub(crate) fn from_vars(vars: &Vars<'_>) -> Self {
        let defaults = Self::default();

        let base_url = vars("WORT_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let user_agent = vars("WORT_USER_AGENT").unwrap_or(defaults.user_agent);

        let timeout_seconds = vars("WORT_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            base_url,
            user_agent,
            timeout_seconds,
        }
    }
}
