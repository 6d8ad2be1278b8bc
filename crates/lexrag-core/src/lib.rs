//! # lexrag-core
//!
//! Foundation crate for the lexrag legal-RAG query pipeline.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::Settings;
pub use errors::{LexragError, LexragResult};
pub use models::{
    CanonicalFilter, CompiledFilter, FilterRequest, Match, MatchMetadata, PipelineKind,
    QueryResult, SparseVector,
};
