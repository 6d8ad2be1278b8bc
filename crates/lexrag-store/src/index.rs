//! Similarity queries against the vector store's data plane.
//!
//! Wire shape: equality clauses keyed by metadata field with `$eq`, a
//! top-level `$or` for disjunctions, camelCase request keys, matches with
//! `id`/`score`/`metadata`. Filters compile elsewhere; this client only
//! ships them.

use lexrag_core::config::StoreConfig;
use lexrag_core::errors::LexragResult;
use lexrag_core::models::{CompiledFilter, Match, SparseVector};
use lexrag_core::traits::IVectorStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::transport;

const API_VERSION: &str = "2025-01";

/// Client for the index data plane.
pub struct IndexClient {
    http: reqwest::blocking::Client,
    host: String,
    api_key: String,
    namespace: String,
}

impl IndexClient {
    pub fn new(config: &StoreConfig) -> LexragResult<Self> {
        Ok(Self {
            http: transport::build_client(config.timeout_secs)?,
            host: config.index_host.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            namespace: config.namespace.clone(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    top_k: usize,
    vector: &'a [f32],
    #[serde(skip_serializing_if = "Option::is_none")]
    sparse_vector: Option<&'a SparseVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a serde_json::Value>,
    include_metadata: bool,
    include_values: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

impl IVectorStore for IndexClient {
    fn query(
        &self,
        vector: &[f32],
        sparse: Option<&SparseVector>,
        filter: &CompiledFilter,
        top_k: usize,
    ) -> LexragResult<Vec<Match>> {
        let body = QueryRequest {
            namespace: &self.namespace,
            top_k,
            vector,
            sparse_vector: sparse,
            // An empty compiled filter means "match all" and is omitted
            // from the request entirely.
            filter: (!filter.is_empty()).then(|| filter.as_value()),
            include_metadata: true,
            include_values: false,
        };

        let url = format!("{}/query", self.host);
        let resp: QueryResponse = transport::post_json(
            &self.http,
            &url,
            "index/query",
            &[
                ("Api-Key", self.api_key.as_str()),
                ("X-Pinecone-API-Version", API_VERSION),
            ],
            None,
            &body,
        )?;

        debug!(
            top_k,
            hybrid = sparse.is_some(),
            matches = resp.matches.len(),
            "index query complete"
        );
        Ok(resp.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_uses_store_wire_keys() {
        let vector = vec![0.1_f32, 0.2];
        let sparse = SparseVector {
            indices: vec![3, 9],
            values: vec![0.5, 0.25],
        };
        let filter = serde_json::json!({"state": {"$eq": "CA"}});
        let body = QueryRequest {
            namespace: "__default__",
            top_k: 100,
            vector: &vector,
            sparse_vector: Some(&sparse),
            filter: Some(&filter),
            include_metadata: true,
            include_values: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["topK"], 100);
        assert_eq!(json["sparseVector"]["indices"][0], 3);
        assert_eq!(json["filter"]["state"]["$eq"], "CA");
        assert_eq!(json["includeMetadata"], true);
        assert_eq!(json["includeValues"], false);
    }

    #[test]
    fn query_request_omits_absent_fields() {
        let vector = vec![0.1_f32];
        let body = QueryRequest {
            namespace: "ns",
            top_k: 5,
            vector: &vector,
            sparse_vector: None,
            filter: None,
            include_metadata: true,
            include_values: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("sparseVector").is_none());
        assert!(json.get("filter").is_none());
    }

    #[test]
    fn query_response_parses_matches_with_metadata() {
        let raw = serde_json::json!({
            "matches": [
                {"id": "c1", "score": 0.87, "metadata": {
                    "chunk_text": "Dogs must be leashed.",
                    "state": "CA", "county": "Alameda",
                    "section": "6.04.010", "obligation": "Y"
                }}
            ],
            "usage": {"readUnits": 1}
        });
        let resp: QueryResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.matches.len(), 1);
        let m = &resp.matches[0];
        assert_eq!(m.id, "c1");
        assert_eq!(m.metadata.state.as_deref(), Some("CA"));
        assert!(m.rerank_score.is_none());
    }
}
