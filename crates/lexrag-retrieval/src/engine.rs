//! QueryEngine: orchestrates one pipeline invocation end to end.
//!
//! standard/qa:          retrieve(k=5) → context → QA prompt → generate
//! standard/filter-only: retrieve(k=10) → context → summary prompt →
//!                       generate → count-wrapped answer, full match set
//! hybrid:               retrieve(k=100) → rerank(top_n) → context →
//!                       hybrid prompt → generate

use lexrag_core::config::PipelineConfig;
use lexrag_core::errors::LexragResult;
use lexrag_core::models::{CompiledFilter, FilterRequest, PipelineKind, QueryResult};
use lexrag_core::traits::{ICrossEncoder, IEmbedder, IGenerator, IVectorStore};
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::filter;
use crate::generation;
use crate::ranking::Reranker;
use crate::search::{DenseRetriever, HybridRetriever};

/// Builds the cross-encoder on first hybrid use. Model load is expensive,
/// so it is deferred until a hybrid query actually arrives.
pub type RerankerFactory = Box<dyn Fn() -> LexragResult<Box<dyn ICrossEncoder>> + Send + Sync>;

/// The query pipeline engine. Owns its collaborators; all shared handles
/// are initialized exactly once, even across concurrent first use.
pub struct QueryEngine {
    embedder: Box<dyn IEmbedder>,
    store: Box<dyn IVectorStore>,
    generator: Box<dyn IGenerator>,
    reranker_factory: RerankerFactory,
    reranker: OnceCell<Box<dyn ICrossEncoder>>,
    config: PipelineConfig,
}

impl QueryEngine {
    pub fn new(
        embedder: Box<dyn IEmbedder>,
        store: Box<dyn IVectorStore>,
        generator: Box<dyn IGenerator>,
        reranker_factory: RerankerFactory,
        config: PipelineConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            generator,
            reranker_factory,
            reranker: OnceCell::new(),
            config,
        }
    }

    /// Run one query through the selected pipeline variant.
    pub fn run_query(
        &self,
        question: &str,
        filters: &FilterRequest,
        pipeline: PipelineKind,
        filter_only: bool,
    ) -> LexragResult<QueryResult> {
        let canonical = filter::normalize(filters);
        let compiled = filter::compile(&canonical);
        debug!(filter = %compiled.as_value(), "filter compiled");

        let result = match pipeline {
            PipelineKind::Standard if filter_only => self.run_filter_only(question, &compiled),
            PipelineKind::Standard => self.run_standard(question, &compiled),
            PipelineKind::Hybrid => self.run_hybrid(question, &compiled),
        }?;

        info!(
            pipeline = ?pipeline,
            filter_only,
            matches = result.matches.len(),
            "query complete"
        );
        Ok(result)
    }

    fn run_standard(&self, question: &str, compiled: &CompiledFilter) -> LexragResult<QueryResult> {
        let retriever = DenseRetriever::new(self.embedder.as_ref(), self.store.as_ref());
        let matches = retriever.retrieve(question, compiled, self.config.qa_top_k)?;

        let context =
            generation::build_context_block(&matches, Some(self.config.max_context_chunks));
        let prompt = generation::build_qa_prompt(question, &context);
        let answer = self.generator.generate(
            &prompt,
            Some(generation::QA_SYSTEM_PROMPT),
            &self.config.generation,
        )?;

        Ok(QueryResult { answer, matches })
    }

    fn run_filter_only(
        &self,
        question: &str,
        compiled: &CompiledFilter,
    ) -> LexragResult<QueryResult> {
        let retriever = DenseRetriever::new(self.embedder.as_ref(), self.store.as_ref());
        let matches = retriever.retrieve(question, compiled, self.config.filter_only_top_k)?;

        let sample_size = self.config.filter_only_top_k;
        let context = generation::build_context_block(&matches, Some(sample_size));
        let prompt = generation::build_summary_prompt(&context);
        let summary = self.generator.generate(
            &prompt,
            Some(generation::SUMMARY_SYSTEM_PROMPT),
            &self.config.generation,
        )?;

        // The answer summarizes a sample; the returned matches are the full
        // retrieved set, not just the summarized ones.
        let answer = generation::build_filter_only_answer(matches.len(), sample_size, &summary);
        Ok(QueryResult { answer, matches })
    }

    fn run_hybrid(&self, question: &str, compiled: &CompiledFilter) -> LexragResult<QueryResult> {
        let retriever = HybridRetriever::new(self.embedder.as_ref(), self.store.as_ref());
        let pool = retriever.retrieve(question, compiled, self.config.hybrid_pool_k)?;

        let encoder = self.cross_encoder()?;
        let matches = Reranker::new(encoder).rerank(question, pool, self.config.rerank_top_n)?;

        let context =
            generation::build_context_block(&matches, Some(self.config.rerank_top_n));
        let prompt = generation::build_hybrid_prompt(question, &context);
        let answer = self
            .generator
            .generate(&prompt, None, &self.config.generation)?;

        Ok(QueryResult { answer, matches })
    }

    /// Exactly-once lazy initialization of the cross-encoder, guarded
    /// against concurrent first use.
    fn cross_encoder(&self) -> LexragResult<&dyn ICrossEncoder> {
        let boxed = self
            .reranker
            .get_or_try_init(|| (self.reranker_factory)())?;
        Ok(boxed.as_ref())
    }

    /// Stage sizing currently in effect.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

/// Convenience for callers that never run the hybrid pipeline.
pub fn no_reranker_factory() -> RerankerFactory {
    Box::new(|| {
        Err(lexrag_core::errors::RetrievalError::RerankerUnavailable {
            reason: "no cross-encoder configured".to_string(),
        }
        .into())
    })
}
