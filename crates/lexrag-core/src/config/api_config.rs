use serde::{Deserialize, Serialize};

use super::defaults;
use super::{str_env, u16_env};

/// HTTP surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Optional bearer token; the query route checks it only when set.
    pub bearer_token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_API_HOST.to_string(),
            port: defaults::DEFAULT_API_PORT,
            bearer_token: String::new(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            host: str_env("API_HOST", defaults::DEFAULT_API_HOST),
            port: u16_env("API_PORT", defaults::DEFAULT_API_PORT),
            bearer_token: str_env("API_BEARER_TOKEN", ""),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
