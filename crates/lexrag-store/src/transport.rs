//! Shared plumbing for the blocking HTTP clients.

use std::time::Duration;

use lexrag_core::errors::{LexragError, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build a blocking client with the given per-request timeout.
pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::blocking::Client, LexragError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| {
            StoreError::RequestFailed {
                endpoint: "client".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

/// POST a JSON body and decode a JSON response. Non-2xx statuses become
/// `StoreError::HttpStatus` with the response body attached.
pub(crate) fn post_json<Req: Serialize, Resp: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &str,
    endpoint: &str,
    headers: &[(&str, &str)],
    bearer: Option<&str>,
    body: &Req,
) -> Result<Resp, LexragError> {
    let mut req = client.post(url).json(body);
    for (name, value) in headers {
        req = req.header(*name, *value);
    }
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }

    let resp = req.send().map_err(|e| StoreError::RequestFailed {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    let status = resp.status();
    if !status.is_success() {
        let body_text = resp.text().unwrap_or_default();
        return Err(StoreError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: body_text,
        }
        .into());
    }

    resp.json::<Resp>().map_err(|e| {
        StoreError::MalformedResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
