//! Local cross-encoder inference via fastembed (ONNX).
//!
//! Model load is expensive; the engine initializes this exactly once per
//! process and caches the handle for its lifetime.

use std::sync::Mutex;

use fastembed::{RerankInitOptions, RerankerModel, TextRerank};
use lexrag_core::errors::{LexragError, LexragResult, RetrievalError};
use lexrag_core::traits::ICrossEncoder;
use tracing::info;

/// fastembed-backed cross-encoder.
pub struct FastembedCrossEncoder {
    model: Mutex<TextRerank>,
    name: String,
}

impl FastembedCrossEncoder {
    /// Download (if needed) and load the cross-encoder model.
    pub fn load(model_name: &str) -> LexragResult<Self> {
        let model = resolve_model(model_name);
        let rerank =
            TextRerank::try_new(RerankInitOptions::new(model)).map_err(|e| {
                RetrievalError::RerankerLoadFailed {
                    model: model_name.to_string(),
                    reason: e.to_string(),
                }
            })?;
        info!(model = model_name, "cross-encoder loaded");
        Ok(Self {
            model: Mutex::new(rerank),
            name: model_name.to_string(),
        })
    }
}

fn resolve_model(name: &str) -> RerankerModel {
    match name.to_ascii_lowercase().as_str() {
        "bge-reranker-v2-m3" => RerankerModel::BGERerankerV2M3,
        "jina-reranker-v1-turbo-en" => RerankerModel::JINARerankerV1TurboEn,
        _ => RerankerModel::BGERerankerBase,
    }
}

impl ICrossEncoder for FastembedCrossEncoder {
    fn score_pairs(&self, query: &str, passages: &[String]) -> LexragResult<Vec<f32>> {
        let documents: Vec<&str> = passages.iter().map(String::as_str).collect();
        let mut model = self.model.lock().map_err(|_| {
            LexragError::from(RetrievalError::RerankerUnavailable {
                reason: "cross-encoder mutex poisoned".to_string(),
            })
        })?;
        let results = model
            .rerank(query, documents, false, None)
            .map_err(|e| RetrievalError::RerankerUnavailable {
                reason: e.to_string(),
            })?;

        // Results arrive sorted by score; map them back to input order.
        let mut scores = vec![0.0_f32; passages.len()];
        for result in results {
            if let Some(slot) = scores.get_mut(result.index) {
                *slot = result.score;
            }
        }
        Ok(scores)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
