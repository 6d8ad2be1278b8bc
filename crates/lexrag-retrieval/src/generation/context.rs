//! Bounded, provenance-annotated context block for the generation prompt.
//!
//! Record order equals input order; the matches arrive already ranked and
//! the assembler never re-sorts.

use std::fmt::Write;

use lexrag_core::models::Match;

/// Fixed sentinel for an empty match list. Never an empty string.
pub const NO_DOCUMENTS_SENTINEL: &str = "No documents were retrieved.";

/// Render the first `max_chunks` matches into a deterministic multi-line
/// block: index, similarity score, provenance fields, active tags, and the
/// verbatim chunk text.
pub fn build_context_block(matches: &[Match], max_chunks: Option<usize>) -> String {
    if matches.is_empty() {
        return NO_DOCUMENTS_SENTINEL.to_string();
    }

    let bounded = match max_chunks {
        Some(limit) => &matches[..matches.len().min(limit)],
        None => matches,
    };

    let mut block = String::new();
    for (i, m) in bounded.iter().enumerate() {
        let md = &m.metadata;
        let _ = writeln!(block, "[Chunk {}]", i + 1);
        let _ = writeln!(block, "Score: {:.4}", m.score);
        let _ = writeln!(block, "State: {}", md.state.as_deref().unwrap_or("N/A"));
        let _ = writeln!(block, "County: {}", md.county.as_deref().unwrap_or("N/A"));
        let _ = writeln!(block, "Section: {}", md.section.as_deref().unwrap_or("N/A"));

        let tags = md.active_tags();
        if !tags.is_empty() {
            let _ = writeln!(block, "Tags: {}", tags.join(", "));
        }

        let _ = writeln!(block, "Text: \"{}\"", md.chunk_text);
        block.push('\n');
    }
    block
}
