use serde::{Deserialize, Serialize};

use super::Match;

/// Which pipeline variant handles a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    #[default]
    Standard,
    Hybrid,
}

/// Terminal output of one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub answer: String,
    pub matches: Vec<Match>,
}
