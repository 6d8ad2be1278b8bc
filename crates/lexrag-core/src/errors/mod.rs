//! Error taxonomy for the query pipeline.
//!
//! Three subsystem enums map onto the three failure classes: configuration
//! failures (fatal at startup), upstream collaborator failures (propagated
//! unchanged), and retrieval-layer failures. Malformed filter input is not
//! an error anywhere in the pipeline; it degrades to "no constraint".

mod config_error;
mod retrieval_error;
mod store_error;

pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Top-level error type for the lexrag workspace.
#[derive(Debug, thiserror::Error)]
pub enum LexragError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Convenience result alias used across the workspace.
pub type LexragResult<T> = Result<T, LexragError>;
