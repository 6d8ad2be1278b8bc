//! # lexrag-retrieval
//!
//! The algorithmic core of the query pipeline: filter normalization and
//! compilation, dense and hybrid retrieval, cross-encoder re-ranking,
//! context assembly, prompt construction, and the orchestrating engine.

pub mod engine;
pub mod filter;
pub mod generation;
pub mod ranking;
pub mod search;

pub use engine::{QueryEngine, RerankerFactory};
