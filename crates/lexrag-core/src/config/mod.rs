//! Environment-backed configuration.
//!
//! Every knob has a default; `Settings::from_env` never fails. Missing
//! credentials only become an error when strict validation is enabled
//! (`REQUIRE_SECRETS=true`), which is checked once at startup.

pub mod defaults;

mod api_config;
mod generation_config;
mod pipeline_config;
mod rerank_config;
mod store_config;

pub use api_config::ApiConfig;
pub use generation_config::GenerationConfig;
pub use pipeline_config::PipelineConfig;
pub use rerank_config::RerankConfig;
pub use store_config::StoreConfig;

use crate::errors::ConfigError;

/// Full application settings, assembled from the process environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub store: StoreConfig,
    pub generation: GenerationConfig,
    pub rerank: RerankConfig,
    pub pipeline: PipelineConfig,
    pub api: ApiConfig,
    /// When true, `validate` fails on missing credentials.
    pub require_secrets: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
            generation: GenerationConfig::from_env(),
            rerank: RerankConfig::from_env(),
            pipeline: PipelineConfig::default(),
            api: ApiConfig::from_env(),
            require_secrets: bool_env("REQUIRE_SECRETS", false),
        }
    }

    /// Strict startup validation. A no-op unless `require_secrets` is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.require_secrets {
            return Ok(());
        }
        let mut missing = Vec::new();
        if self.store.api_key.is_empty() {
            missing.push("PINECONE_API_KEY");
        }
        if self.store.index_host.is_empty() {
            missing.push("PINECONE_INDEX_HOST");
        }
        if self.generation.base_url.is_empty() {
            missing.push("GENERATION_BASE_URL");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingVars {
                vars: missing.join(", "),
            })
        }
    }
}

pub(crate) fn str_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn bool_env(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ),
        Err(_) => default,
    }
}

pub(crate) fn u16_env(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn u64_env(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
