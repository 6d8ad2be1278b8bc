use crate::errors::LexragResult;
use crate::models::{CompiledFilter, Match, SparseVector};

/// Similarity queries against the vector store.
pub trait IVectorStore: Send + Sync {
    /// Run one similarity query. `sparse` is present only in hybrid mode.
    /// Returns matches ordered by descending native similarity score,
    /// at most `top_k` of them.
    fn query(
        &self,
        vector: &[f32],
        sparse: Option<&SparseVector>,
        filter: &CompiledFilter,
        top_k: usize,
    ) -> LexragResult<Vec<Match>>;
}
