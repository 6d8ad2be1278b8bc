//! # lexrag-store
//!
//! Blocking HTTP clients for the pipeline's external collaborators: the
//! vector store index, the embedding inference service, and the
//! text-generation backend. Each client implements the matching seam trait
//! from `lexrag-core`. Failures map to `StoreError` and propagate to the
//! caller unchanged; retries, if desired, belong to an outer transport.

mod generator;
mod index;
mod inference;
mod transport;

pub use generator::ChatCompletionClient;
pub use index::IndexClient;
pub use inference::InferenceClient;
