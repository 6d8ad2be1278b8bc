use lexrag_core::errors::LexragResult;
use lexrag_core::models::{CompiledFilter, Match};
use lexrag_core::traits::{IEmbedder, IVectorStore};
use tracing::debug;

/// Dense-only retrieval: one query embedding, one similarity query.
pub struct DenseRetriever<'a> {
    embedder: &'a dyn IEmbedder,
    store: &'a dyn IVectorStore,
}

impl<'a> DenseRetriever<'a> {
    pub fn new(embedder: &'a dyn IEmbedder, store: &'a dyn IVectorStore) -> Self {
        Self { embedder, store }
    }

    /// Embed the query and run one filtered similarity query.
    /// Upstream errors propagate unmodified.
    pub fn retrieve(
        &self,
        query: &str,
        filter: &CompiledFilter,
        k: usize,
    ) -> LexragResult<Vec<Match>> {
        let vector = self.embedder.embed_dense(query)?;
        let matches = self.store.query(&vector, None, filter, k)?;
        debug!(k, matches = matches.len(), "dense retrieval complete");
        Ok(matches)
    }
}
