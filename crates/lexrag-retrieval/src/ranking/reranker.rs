//! Cross-encoder re-ranking of a retrieved candidate set.
//!
//! Every (query, chunk_text) pair is scored independently; the matches are
//! then stably sorted by descending `rerank_score` and truncated. Ties keep
//! their original relative order.

use lexrag_core::errors::{LexragResult, RetrievalError};
use lexrag_core::models::Match;
use lexrag_core::traits::ICrossEncoder;
use tracing::debug;

/// Applies cross-encoder scores to a candidate set.
pub struct Reranker<'a> {
    encoder: &'a dyn ICrossEncoder,
}

impl<'a> Reranker<'a> {
    pub fn new(encoder: &'a dyn ICrossEncoder) -> Self {
        Self { encoder }
    }

    /// Attach a `rerank_score` to every match, sort descending (stable),
    /// and keep the best `top_n`.
    pub fn rerank(
        &self,
        query: &str,
        mut matches: Vec<Match>,
        top_n: usize,
    ) -> LexragResult<Vec<Match>> {
        if matches.is_empty() {
            return Ok(matches);
        }

        let passages: Vec<String> = matches
            .iter()
            .map(|m| m.metadata.chunk_text.clone())
            .collect();
        let scores = self.encoder.score_pairs(query, &passages)?;
        if scores.len() != matches.len() {
            return Err(RetrievalError::RerankScoreMismatch {
                scored: scores.len(),
                expected: matches.len(),
            }
            .into());
        }

        for (m, score) in matches.iter_mut().zip(&scores) {
            m.rerank_score = Some(*score);
        }

        // sort_by is stable, so equal scores keep input order.
        matches.sort_by(|a, b| {
            let (a, b) = (a.rerank_score.unwrap_or(0.0), b.rerank_score.unwrap_or(0.0));
            b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(top_n);

        debug!(
            encoder = self.encoder.name(),
            kept = matches.len(),
            "rerank complete"
        );
        Ok(matches)
    }
}
