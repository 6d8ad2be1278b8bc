//! System instructions and user prompts for the three pipeline modes.

/// Fixed refusal text the QA instruction demands when the context is
/// insufficient. Also useful for callers that want to detect refusals.
pub const REFUSAL_TEXT: &str = "The information was not found in the provided documents.";

/// System instruction for standard question answering: citation-grounded,
/// with a fixed refusal string.
pub const QA_SYSTEM_PROMPT: &str = r#"You are a highly intelligent legal analyst. Your goal is to help a user understand the legal information provided.
You will be given the user's original question and a list of 'Retrieved Chunks' from a legal database.

Your task is to generate a natural language response. You MUST follow these rules:
1. Base your answer ONLY on the information inside the "Retrieved Chunks". Do not use any outside knowledge.
2. Use the 'Score, State, County, Section, Tags' fields for quick understanding, but use the full 'Text' field to find the specific answer.
3. If the chunks do not contain a clear answer to the user's question, you MUST respond only with the text: 'The information was not found in the provided documents.'
4. If the chunks do contain an answer, summarize it and cite the chunks.

TEMPLATE FOR A SUCCESSFUL ANSWER:
### Summary of Findings
[Your summary of the answer found in the chunks. Cite the chunks, e.g., "The law prohibits owners from letting their dog disturb the peace [Chunk 1]."]

### How This Was Generated
To answer your question, this tool performed a search on the legal database. The "Retrieved Chunks" represent the top most relevant sections of the law found by our search. This summary is based only on the information in those chunks."#;

/// System instruction for filter-only discovery mode: summarize themes,
/// never answer.
pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a highly intelligent legal analyst.
You will be given a sample of the top-retrieved legal documents.
Your task is to provide a high-level summary of the main themes found in this sample.

- DO NOT try to answer a question.
- DO NOT say "I cannot find an answer."
- Simply summarize what you see. Group similar topics together.
- Start your response with: "The documents in this sample primarily discuss...""#;

/// User prompt for standard question answering.
pub fn build_qa_prompt(question: &str, context: &str) -> String {
    format!("**User's Question:**\n{question}\n\n**Retrieved Chunks:**\n{context}")
}

/// User prompt for filter-only summarization.
pub fn build_summary_prompt(context: &str) -> String {
    format!("**Retrieved Chunks (Sample):**\n{context}")
}

/// Single self-contained prompt for the hybrid pipeline. No system
/// instruction and no fixed refusal string.
pub fn build_hybrid_prompt(question: &str, context: &str) -> String {
    format!(
        "You are a legal assistant. Answer based only on the CONTEXT.\n\n\
         QUESTION: {question}\n\nCONTEXT:\n{context}\n\n\
         If the context is insufficient, say so and outline what is missing."
    )
}

/// Wrap the filter-only summary in a message stating the total match count
/// and pointing at the full result set.
pub fn build_filter_only_answer(total_matches: usize, sample_size: usize, summary: &str) -> String {
    format!(
        "Found {total_matches} laws matching your filters. \
         The full list is included in the returned matches.\n\n\
         Here is a quick summary of the first {sample_size} results:\n\n{summary}"
    )
}
