use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::GenerationParams;

/// Pipeline stage sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Retrieval depth for standard question answering.
    pub qa_top_k: usize,
    /// Retrieval depth for filter-only discovery mode.
    pub filter_only_top_k: usize,
    /// Candidate pool size for hybrid retrieval, prior to reranking.
    pub hybrid_pool_k: usize,
    /// Matches kept after cross-encoder reranking.
    pub rerank_top_n: usize,
    /// Upper bound on context records handed to generation.
    pub max_context_chunks: usize,
    /// Sampling parameters for the generation backend.
    pub generation: GenerationParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            qa_top_k: defaults::DEFAULT_QA_TOP_K,
            filter_only_top_k: defaults::DEFAULT_FILTER_ONLY_TOP_K,
            hybrid_pool_k: defaults::DEFAULT_HYBRID_POOL_K,
            rerank_top_n: defaults::DEFAULT_RERANK_TOP_N,
            max_context_chunks: defaults::DEFAULT_MAX_CONTEXT_CHUNKS,
            generation: GenerationParams::default(),
        }
    }
}
