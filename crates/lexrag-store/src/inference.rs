//! Query embedding via the inference control plane.
//!
//! Dense and sparse embeddings come from separate models behind the same
//! `/embed` endpoint; hybrid retrieval calls both.

use lexrag_core::config::StoreConfig;
use lexrag_core::errors::{LexragResult, StoreError};
use lexrag_core::models::SparseVector;
use lexrag_core::traits::IEmbedder;
use serde::{Deserialize, Serialize};

use crate::transport;

const API_VERSION: &str = "2025-01";

/// Client for the embedding inference endpoint.
pub struct InferenceClient {
    http: reqwest::blocking::Client,
    base: String,
    api_key: String,
    dense_model: String,
    sparse_model: String,
}

impl InferenceClient {
    pub fn new(config: &StoreConfig) -> LexragResult<Self> {
        Ok(Self {
            http: transport::build_client(config.timeout_secs)?,
            base: config.inference_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            dense_model: config.dense_model.clone(),
            sparse_model: config.sparse_model.clone(),
        })
    }

    fn embed(&self, model: &str, text: &str) -> LexragResult<EmbedData> {
        let body = EmbedRequest {
            model,
            parameters: EmbedParameters {
                input_type: "query",
                truncate: "END",
            },
            inputs: vec![EmbedInput { text }],
        };

        let url = format!("{}/embed", self.base);
        let mut resp: EmbedResponse = transport::post_json(
            &self.http,
            &url,
            "inference/embed",
            &[
                ("Api-Key", self.api_key.as_str()),
                ("X-Pinecone-API-Version", API_VERSION),
            ],
            None,
            &body,
        )?;

        if resp.data.is_empty() {
            return Err(StoreError::MalformedResponse {
                endpoint: "inference/embed".to_string(),
                reason: format!("no embedding returned for model {model}"),
            }
            .into());
        }
        Ok(resp.data.swap_remove(0))
    }
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    parameters: EmbedParameters<'a>,
    inputs: Vec<EmbedInput<'a>>,
}

#[derive(Serialize)]
struct EmbedParameters<'a> {
    input_type: &'a str,
    truncate: &'a str,
}

#[derive(Serialize)]
struct EmbedInput<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    data: Vec<EmbedData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmbedData {
    values: Vec<f32>,
    sparse_indices: Vec<u32>,
    sparse_values: Vec<f32>,
}

impl IEmbedder for InferenceClient {
    fn embed_dense(&self, text: &str) -> LexragResult<Vec<f32>> {
        let data = self.embed(&self.dense_model, text)?;
        if data.values.is_empty() {
            return Err(StoreError::MalformedResponse {
                endpoint: "inference/embed".to_string(),
                reason: "dense model returned no values".to_string(),
            }
            .into());
        }
        Ok(data.values)
    }

    fn embed_sparse(&self, text: &str) -> LexragResult<SparseVector> {
        let data = self.embed(&self.sparse_model, text)?;
        Ok(SparseVector {
            indices: data.sparse_indices,
            values: data.sparse_values,
        })
    }
}
