//! End-to-end pipeline tests against mock collaborators.
//!
//! Every stage boundary is a trait, so the full engine runs here without
//! any network or model: the store records the queries it receives, the
//! generator records the prompts, and the cross-encoder scores passages
//! deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lexrag_core::config::PipelineConfig;
use lexrag_core::errors::{LexragResult, StoreError};
use lexrag_core::models::{
    CompiledFilter, FilterRequest, Match, MatchMetadata, PipelineKind, SparseVector,
};
use lexrag_core::traits::{ICrossEncoder, IEmbedder, IGenerator, IVectorStore};
use lexrag_retrieval::{QueryEngine, RerankerFactory};

// ---------------------------------------------------------------------------
// Mock collaborators
// ---------------------------------------------------------------------------

struct MockEmbedder;

impl IEmbedder for MockEmbedder {
    fn embed_dense(&self, _text: &str) -> LexragResult<Vec<f32>> {
        Ok(vec![0.1, 0.2, 0.3, 0.4])
    }

    fn embed_sparse(&self, _text: &str) -> LexragResult<SparseVector> {
        Ok(SparseVector {
            indices: vec![7, 19],
            values: vec![0.8, 0.3],
        })
    }
}

#[derive(Debug, Clone)]
struct RecordedQuery {
    top_k: usize,
    hybrid: bool,
    filter: serde_json::Value,
}

struct RecordingStore {
    corpus: Vec<Match>,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl RecordingStore {
    fn with_corpus(n: usize) -> Self {
        let corpus = (0..n)
            .map(|i| Match {
                id: format!("chunk-{i}"),
                // Descending native score, like a real store.
                score: 1.0 - i as f32 * 0.001,
                rerank_score: None,
                metadata: MatchMetadata {
                    chunk_text: format!("passage {i}"),
                    state: Some("CA".to_string()),
                    county: Some("Alameda".to_string()),
                    section: Some(format!("6.04.{i:03}")),
                    obligation: Some("Y".to_string()),
                    ..Default::default()
                },
            })
            .collect();
        Self {
            corpus,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn recorded(&self) -> Vec<RecordedQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl IVectorStore for RecordingStore {
    fn query(
        &self,
        _vector: &[f32],
        sparse: Option<&SparseVector>,
        filter: &CompiledFilter,
        top_k: usize,
    ) -> LexragResult<Vec<Match>> {
        self.queries.lock().unwrap().push(RecordedQuery {
            top_k,
            hybrid: sparse.is_some(),
            filter: filter.as_value().clone(),
        });
        Ok(self.corpus.iter().take(top_k).cloned().collect())
    }
}

#[derive(Debug, Clone)]
struct RecordedPrompt {
    prompt: String,
    system: Option<String>,
}

struct RecordingGenerator {
    prompts: Arc<Mutex<Vec<RecordedPrompt>>>,
    answer: String,
}

impl RecordingGenerator {
    fn answering(answer: &str) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            answer: answer.to_string(),
        }
    }

    fn recorded(&self) -> Vec<RecordedPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl IGenerator for RecordingGenerator {
    fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
        _params: &lexrag_core::models::GenerationParams,
    ) -> LexragResult<String> {
        self.prompts.lock().unwrap().push(RecordedPrompt {
            prompt: prompt.to_string(),
            system: system.map(str::to_owned),
        });
        Ok(self.answer.clone())
    }
}

/// Scores "passage N" as N, so higher-indexed passages rank first.
struct IndexScoreEncoder;

impl ICrossEncoder for IndexScoreEncoder {
    fn score_pairs(&self, _query: &str, passages: &[String]) -> LexragResult<Vec<f32>> {
        Ok(passages
            .iter()
            .map(|p| {
                p.rsplit(' ')
                    .next()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(0.0)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "index-score"
    }
}

fn counting_factory(counter: Arc<AtomicUsize>) -> RerankerFactory {
    Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(IndexScoreEncoder) as Box<dyn ICrossEncoder>)
    })
}

struct EngineHarness {
    engine: QueryEngine,
    store_queries: Arc<Mutex<Vec<RecordedQuery>>>,
    generator_prompts: Arc<Mutex<Vec<RecordedPrompt>>>,
    reranker_loads: Arc<AtomicUsize>,
}

fn harness(corpus_size: usize) -> EngineHarness {
    let store = RecordingStore::with_corpus(corpus_size);
    let store_queries = store.queries.clone();
    let generator = RecordingGenerator::answering("Leash laws require restraint [Chunk 1].");
    let generator_prompts = generator.prompts.clone();
    let reranker_loads = Arc::new(AtomicUsize::new(0));
    let engine = QueryEngine::new(
        Box::new(MockEmbedder),
        Box::new(store),
        Box::new(generator),
        counting_factory(reranker_loads.clone()),
        PipelineConfig::default(),
    );
    EngineHarness {
        engine,
        store_queries,
        generator_prompts,
        reranker_loads,
    }
}

fn alameda_filters() -> FilterRequest {
    FilterRequest::from_value(&serde_json::json!({
        "locations": [{"state": "CA", "counties": ["Alameda"]}]
    }))
}

// ---------------------------------------------------------------------------
// Standard pipeline
// ---------------------------------------------------------------------------

#[test]
fn standard_qa_retrieves_five_with_compiled_or_filter() {
    let h = harness(20);
    let result = h
        .engine
        .run_query(
            "What are leash laws in County X?",
            &alameda_filters(),
            PipelineKind::Standard,
            false,
        )
        .unwrap();

    let queries = h.store_queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].top_k, 5);
    assert!(!queries[0].hybrid);
    assert_eq!(
        queries[0].filter,
        serde_json::json!({
            "$or": [{"state": {"$eq": "CA"}, "county": {"$eq": "Alameda"}}]
        })
    );

    assert!(!result.answer.is_empty());
    assert!(result.matches.len() <= 5);
}

#[test]
fn standard_qa_uses_citation_grounded_system_prompt() {
    let h = harness(5);
    h.engine
        .run_query("leash laws?", &FilterRequest::default(), PipelineKind::Standard, false)
        .unwrap();

    let prompts = h.generator_prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    let system = prompts[0].system.as_deref().unwrap();
    assert!(system.contains("The information was not found in the provided documents."));
    assert!(prompts[0].prompt.contains("**User's Question:**"));
    assert!(prompts[0].prompt.contains("[Chunk 1]"));
}

#[test]
fn standard_with_empty_filters_sends_no_constraint() {
    let h = harness(5);
    h.engine
        .run_query("q", &FilterRequest::default(), PipelineKind::Standard, false)
        .unwrap();
    let queries = h.store_queries.lock().unwrap();
    assert_eq!(queries[0].filter, serde_json::json!({}));
}

#[test]
fn standard_with_no_matches_prompts_with_sentinel() {
    let h = harness(0);
    let result = h
        .engine
        .run_query("q", &FilterRequest::default(), PipelineKind::Standard, false)
        .unwrap();
    assert!(result.matches.is_empty());
    let prompts = h.generator_prompts.lock().unwrap();
    assert!(prompts[0].prompt.contains("No documents were retrieved."));
}

// ---------------------------------------------------------------------------
// Filter-only mode
// ---------------------------------------------------------------------------

#[test]
fn filter_only_retrieves_ten_and_wraps_summary() {
    let h = harness(20);
    let result = h
        .engine
        .run_query("q", &alameda_filters(), PipelineKind::Standard, true)
        .unwrap();

    let queries = h.store_queries.lock().unwrap();
    assert_eq!(queries[0].top_k, 10);

    // Answer reports the total count and wraps the generated summary.
    assert!(result.answer.starts_with("Found 10 laws matching your filters."));
    assert!(result.answer.ends_with("Leash laws require restraint [Chunk 1]."));
    // Matches are the full retrieved set, not a summarized sample.
    assert_eq!(result.matches.len(), 10);

    let prompts = h.generator_prompts.lock().unwrap();
    let system = prompts[0].system.as_deref().unwrap();
    assert!(system.contains("DO NOT try to answer"));
    assert!(prompts[0].prompt.contains("**Retrieved Chunks (Sample):**"));
}

// ---------------------------------------------------------------------------
// Hybrid pipeline
// ---------------------------------------------------------------------------

#[test]
fn hybrid_casts_wide_net_then_reranks_to_ten() {
    let h = harness(150);
    let result = h
        .engine
        .run_query(
            "What are leash laws in County X?",
            &alameda_filters(),
            PipelineKind::Hybrid,
            false,
        )
        .unwrap();

    let queries = h.store_queries.lock().unwrap();
    assert_eq!(queries[0].top_k, 100);
    assert!(queries[0].hybrid);

    assert!(result.matches.len() <= 10);
    // Sorted descending by rerank_score.
    let scores: Vec<f32> = result
        .matches
        .iter()
        .map(|m| m.rerank_score.unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    // IndexScoreEncoder ranks the highest-numbered passages first.
    assert_eq!(result.matches[0].metadata.chunk_text, "passage 99");

    let prompts = h.generator_prompts.lock().unwrap();
    assert!(prompts[0].system.is_none());
    assert!(prompts[0].prompt.contains("Answer based only on the CONTEXT."));
}

#[test]
fn hybrid_initializes_reranker_exactly_once() {
    let h = harness(30);
    for _ in 0..3 {
        h.engine
            .run_query("q", &FilterRequest::default(), PipelineKind::Hybrid, false)
            .unwrap();
    }
    assert_eq!(h.reranker_loads.load(Ordering::SeqCst), 1);
}

#[test]
fn standard_never_touches_the_reranker() {
    let h = harness(5);
    h.engine
        .run_query("q", &FilterRequest::default(), PipelineKind::Standard, false)
        .unwrap();
    assert_eq!(h.reranker_loads.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Failure propagation
// ---------------------------------------------------------------------------

struct FailingStore;

impl IVectorStore for FailingStore {
    fn query(
        &self,
        _vector: &[f32],
        _sparse: Option<&SparseVector>,
        _filter: &CompiledFilter,
        _top_k: usize,
    ) -> LexragResult<Vec<Match>> {
        Err(StoreError::HttpStatus {
            endpoint: "index/query".to_string(),
            status: 503,
            body: "overloaded".to_string(),
        }
        .into())
    }
}

#[test]
fn upstream_store_error_propagates_unchanged() {
    let generator = RecordingGenerator::answering("unused");
    let engine = QueryEngine::new(
        Box::new(MockEmbedder),
        Box::new(FailingStore),
        Box::new(generator),
        counting_factory(Arc::new(AtomicUsize::new(0))),
        PipelineConfig::default(),
    );
    let err = engine
        .run_query("q", &FilterRequest::default(), PipelineKind::Standard, false)
        .unwrap_err();
    assert!(err.to_string().contains("503"));
}
