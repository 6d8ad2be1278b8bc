/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("reranker unavailable: {reason}")]
    RerankerUnavailable { reason: String },

    #[error("reranker model load failed: {model}: {reason}")]
    RerankerLoadFailed { model: String, reason: String },

    #[error("reranker scored {scored} passages for {expected} candidates")]
    RerankScoreMismatch { scored: usize, expected: usize },
}
