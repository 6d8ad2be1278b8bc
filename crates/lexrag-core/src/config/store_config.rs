use serde::{Deserialize, Serialize};

use super::defaults;
use super::{str_env, u64_env};

/// Vector store and embedding-inference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// API key shared by the store and inference endpoints.
    pub api_key: String,
    /// Base URL of the index data plane (similarity queries).
    pub index_host: String,
    /// Namespace within the index.
    pub namespace: String,
    /// Base URL of the inference control plane (query embedding).
    pub inference_base: String,
    /// Dense embedding model id.
    pub dense_model: String,
    /// Sparse embedding model id (hybrid pipeline).
    pub sparse_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            index_host: String::new(),
            namespace: defaults::DEFAULT_NAMESPACE.to_string(),
            inference_base: defaults::DEFAULT_INFERENCE_BASE.to_string(),
            dense_model: defaults::DEFAULT_DENSE_MODEL.to_string(),
            sparse_model: defaults::DEFAULT_SPARSE_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: str_env("PINECONE_API_KEY", ""),
            index_host: str_env("PINECONE_INDEX_HOST", ""),
            namespace: str_env("PINECONE_NAMESPACE", defaults::DEFAULT_NAMESPACE),
            inference_base: str_env("PINECONE_INFERENCE_BASE", defaults::DEFAULT_INFERENCE_BASE),
            dense_model: str_env("EMBED_DENSE_MODEL", defaults::DEFAULT_DENSE_MODEL),
            sparse_model: str_env("EMBED_SPARSE_MODEL", defaults::DEFAULT_SPARSE_MODEL),
            timeout_secs: u64_env("STORE_TIMEOUT_SECS", defaults::DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
