//! Scored matches returned by the vector store.

use serde::{Deserialize, Serialize};

/// A sparse lexical vector: parallel index/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

/// One scored match from a similarity query. `rerank_score` is attached
/// only by the reranker stage in the hybrid pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerank_score: Option<f32>,
    #[serde(default)]
    pub metadata: MatchMetadata,
}

/// Per-chunk metadata stored alongside each vector. Boolean tags are the
/// literal string "Y" in the store, never a native boolean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchMetadata {
    pub chunk_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prohibition: Option<String>,
}

impl MatchMetadata {
    /// Titled names of the tags set to "Y", in canonical order.
    pub fn active_tags(&self) -> Vec<&'static str> {
        [
            ("Obligation", &self.obligation),
            ("Penalty", &self.penalty),
            ("Permission", &self.permission),
            ("Prohibition", &self.prohibition),
        ]
        .into_iter()
        .filter_map(|(title, v)| (v.as_deref() == Some("Y")).then_some(title))
        .collect()
    }
}
