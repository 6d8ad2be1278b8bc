use serde::{Deserialize, Serialize};

use super::defaults;
use super::str_env;

/// Cross-encoder reranker configuration (hybrid pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Cross-encoder model name.
    pub model: String,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_RERANKER_MODEL.to_string(),
        }
    }
}

impl RerankConfig {
    pub fn from_env() -> Self {
        Self {
            model: str_env("RERANKER_MODEL", defaults::DEFAULT_RERANKER_MODEL),
        }
    }
}
