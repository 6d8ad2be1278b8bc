use crate::errors::LexragResult;
use crate::models::SparseVector;

/// Query embedding via the inference service.
pub trait IEmbedder: Send + Sync {
    /// Embed a query into a dense vector.
    fn embed_dense(&self, text: &str) -> LexragResult<Vec<f32>>;

    /// Embed a query into a sparse vector (hybrid mode).
    fn embed_sparse(&self, text: &str) -> LexragResult<SparseVector>;
}
