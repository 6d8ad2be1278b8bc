// Single source of truth for all default values.

// --- Vector store / embedding inference ---
pub const DEFAULT_NAMESPACE: &str = "__default__";
pub const DEFAULT_INFERENCE_BASE: &str = "https://api.pinecone.io";
pub const DEFAULT_DENSE_MODEL: &str = "llama-text-embed-v2";
pub const DEFAULT_SPARSE_MODEL: &str = "pinecone-sparse-english-v0";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_VECTOR_DIM: usize = 1024; // llama-text-embed-v2

// --- Pipeline ---
pub const DEFAULT_QA_TOP_K: usize = 5;
pub const DEFAULT_FILTER_ONLY_TOP_K: usize = 10;
pub const DEFAULT_HYBRID_POOL_K: usize = 100;
pub const DEFAULT_RERANK_TOP_N: usize = 10;
pub const DEFAULT_MAX_CONTEXT_CHUNKS: usize = 10;

// --- Generation ---
pub const DEFAULT_GENERATION_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TOP_P: f32 = 0.9;

// --- Reranker ---
pub const DEFAULT_RERANKER_MODEL: &str = "bge-reranker-base";

// --- API ---
pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 8000;
