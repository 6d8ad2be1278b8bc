//! Collaborator seams. The pipeline core talks to the vector store, the
//! embedding service, the cross-encoder, and the generation backend only
//! through these traits, so every stage is testable with mocks.

mod cross_encoder;
mod embedder;
mod generator;
mod vector_store;

pub use cross_encoder::ICrossEncoder;
pub use embedder::IEmbedder;
pub use generator::IGenerator;
pub use vector_store::IVectorStore;
