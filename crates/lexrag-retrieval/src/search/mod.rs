//! First-stage retrieval: dense-only for the standard pipeline, dense +
//! sparse for the hybrid pipeline. Both share the same contract: matches
//! ordered by descending native similarity score, at most `k` of them.

mod dense;
mod hybrid;

pub use dense::DenseRetriever;
pub use hybrid::HybridRetriever;
