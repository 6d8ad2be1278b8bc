//! Generation backend client (OpenAI-style chat completions).
//!
//! The pipeline treats generation as a pure function call; this client
//! carries no pipeline-specific logic beyond cleaning the completion text.

use lexrag_core::config::GenerationConfig;
use lexrag_core::errors::{LexragResult, StoreError};
use lexrag_core::models::GenerationParams;
use lexrag_core::traits::IGenerator;
use serde::{Deserialize, Serialize};

use crate::transport;

/// Client for an OpenAI-compatible chat-completion endpoint.
pub struct ChatCompletionClient {
    http: reqwest::blocking::Client,
    base: String,
    model: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(config: &GenerationConfig) -> LexragResult<Self> {
        Ok(Self {
            http: transport::build_client(config.timeout_secs)?,
            base: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

impl IGenerator for ChatCompletionClient {
    fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
        params: &GenerationParams,
    ) -> LexragResult<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: params.max_new_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        };

        let url = format!("{}/v1/chat/completions", self.base);
        let bearer = (!self.api_key.is_empty()).then_some(self.api_key.as_str());
        let mut resp: ChatResponse =
            transport::post_json(&self.http, &url, "generation/chat", &[], bearer, &body)?;

        if resp.choices.is_empty() {
            return Err(StoreError::MalformedResponse {
                endpoint: "generation/chat".to_string(),
                reason: "no choices in completion".to_string(),
            }
            .into());
        }
        let text = resp.choices.swap_remove(0).message.content;
        Ok(clean_completion(&text, prompt))
    }
}

/// Strip an echoed prompt prefix and surrounding whitespace. Some backends
/// return the prompt followed by the completion.
fn clean_completion(text: &str, prompt: &str) -> String {
    let stripped = text.strip_prefix(prompt).unwrap_or(text);
    stripped.trim().to_string()
}
