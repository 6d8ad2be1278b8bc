use crate::errors::LexragResult;
use crate::models::GenerationParams;

/// Text-generation backend. A pure collaborator boundary: no pipeline
/// logic lives behind it.
pub trait IGenerator: Send + Sync {
    /// Produce a completion for `prompt`, optionally under a system
    /// instruction.
    fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
        params: &GenerationParams,
    ) -> LexragResult<String>;
}
