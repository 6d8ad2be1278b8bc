use serde::{Deserialize, Serialize};

use super::defaults;
use super::{str_env, u64_env};

/// Text-generation backend configuration (OpenAI-style chat endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Base URL of the generation backend.
    pub base_url: String,
    /// Model id to request.
    pub model: String,
    /// Optional bearer token for the backend.
    pub api_key: String,
    /// Per-request timeout in seconds. Generation is the slowest stage.
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            api_key: String::new(),
            timeout_secs: 120,
        }
    }
}

impl GenerationConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: str_env("GENERATION_BASE_URL", ""),
            model: str_env("GENERATION_MODEL", defaults::DEFAULT_GENERATION_MODEL),
            api_key: str_env("GENERATION_API_KEY", ""),
            timeout_secs: u64_env("GENERATION_TIMEOUT_SECS", 120),
        }
    }
}
