/// Upstream collaborator errors: vector store, embedding inference, and
/// the generation backend. These propagate to the caller unchanged; no
/// retry or recovery happens inside the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    HttpStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}
