//! Second-stage relevance ranking (hybrid pipeline only).

#[cfg(feature = "reranker")]
mod cross_encoder;
mod reranker;

#[cfg(feature = "reranker")]
pub use cross_encoder::FastembedCrossEncoder;
pub use reranker::Reranker;
