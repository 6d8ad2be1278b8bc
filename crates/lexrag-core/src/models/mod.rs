//! Data model for one query pipeline invocation.
//!
//! Everything here lives only for the duration of a single query; nothing
//! is persisted.

mod filter;
mod generation;
mod matches;
mod query;

pub use filter::{
    CanonicalFilter, CompiledFilter, FilterRequest, FlatLocation, LocationFilter, TagSet, TagValue,
};
pub use generation::GenerationParams;
pub use matches::{Match, MatchMetadata, SparseVector};
pub use query::{PipelineKind, QueryResult};
