use crate::errors::LexragResult;

/// Pairwise (query, passage) relevance scoring.
pub trait ICrossEncoder: Send + Sync {
    /// Score each passage against the query. Returns one score per passage,
    /// in input order.
    fn score_pairs(&self, query: &str, passages: &[String]) -> LexragResult<Vec<f32>>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
