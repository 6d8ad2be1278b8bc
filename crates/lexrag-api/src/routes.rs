//! Request handlers. The pipeline itself is synchronous, so the query
//! route bridges into it with `spawn_blocking`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use lexrag_core::models::{FilterRequest, PipelineKind, QueryResult};
use lexrag_retrieval::QueryEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
    /// When set, `/query` requires a matching bearer token.
    pub bearer_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueryIn {
    pub query: String,
    #[serde(default)]
    pub filters: serde_json::Value,
    #[serde(default)]
    pub pipeline: PipelineKind,
    #[serde(default)]
    pub filter_only: bool,
}

pub async fn query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(inp): Json<QueryIn>,
) -> Result<Json<QueryResult>, (StatusCode, String)> {
    if let Some(expected) = &state.bearer_token {
        let provided = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if !authorized(expected, provided) {
            return Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()));
        }
    }

    let engine = state.engine.clone();
    let filters = FilterRequest::from_value(&inp.filters);
    let result = tokio::task::spawn_blocking(move || {
        engine.run_query(&inp.query, &filters, inp.pipeline, inp.filter_only)
    })
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
    .map_err(|e| {
        tracing::warn!(error = %e, "query failed");
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    Ok(Json(result))
}

pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn authorized(expected: &str, provided: Option<&str>) -> bool {
    provided == Some(&format!("Bearer {expected}"))
}
