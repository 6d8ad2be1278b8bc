//! Context assembly and prompt construction for the generation stage.

mod context;
mod prompt;

pub use context::{build_context_block, NO_DOCUMENTS_SENTINEL};
pub use prompt::{
    build_filter_only_answer, build_hybrid_prompt, build_qa_prompt, build_summary_prompt,
    QA_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT,
};
