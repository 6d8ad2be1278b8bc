use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Sampling parameters passed through to the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: defaults::DEFAULT_MAX_NEW_TOKENS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            top_p: defaults::DEFAULT_TOP_P,
        }
    }
}
