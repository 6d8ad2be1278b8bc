use lexrag_core::errors::LexragResult;
use lexrag_core::models::{CompiledFilter, Match};
use lexrag_core::traits::{IEmbedder, IVectorStore};
use tracing::debug;

/// Hybrid retrieval: dense + sparse embeddings combined in one similarity
/// query, casting a wide candidate net for the reranker.
pub struct HybridRetriever<'a> {
    embedder: &'a dyn IEmbedder,
    store: &'a dyn IVectorStore,
}

impl<'a> HybridRetriever<'a> {
    pub fn new(embedder: &'a dyn IEmbedder, store: &'a dyn IVectorStore) -> Self {
        Self { embedder, store }
    }

    /// Embed the query densely and sparsely, then run one combined query.
    /// The two embedding calls are independent; they run sequentially here
    /// since the pipeline is synchronous.
    pub fn retrieve(
        &self,
        query: &str,
        filter: &CompiledFilter,
        k: usize,
    ) -> LexragResult<Vec<Match>> {
        let dense = self.embedder.embed_dense(query)?;
        let sparse = self.embedder.embed_sparse(query)?;
        let matches = self.store.query(&dense, Some(&sparse), filter, k)?;
        debug!(k, matches = matches.len(), "hybrid retrieval complete");
        Ok(matches)
    }
}
