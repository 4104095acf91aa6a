//! Data transfer objects for the completions endpoint.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `POST /completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionBody {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Number of completions
    n: u32,
    /// Stop sequence
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<String>,
    /// Presence penalty
    #[builder(default)]
    presence_penalty: f32,
    /// Frequency penalty
    #[builder(default)]
    frequency_penalty: f32,
    /// Server-side candidates per returned completion
    #[builder(default = "1")]
    best_of: u32,
    /// Echo the prompt in the completion text
    #[builder(default)]
    echo: bool,
}

impl CompletionBody {
    /// Creates a new builder for CompletionBody.
    pub fn builder() -> CompletionBodyBuilder {
        CompletionBodyBuilder::default()
    }
}

/// A choice in the completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// Generated text
    pub text: String,
    /// Position of the choice
    #[serde(default)]
    pub index: u32,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// Completions endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Response choices
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Error details inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
