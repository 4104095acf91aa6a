//! Completion provider integrations for Variator.
//!
//! Currently ships a client for OpenAI-compatible legacy completion
//! endpoints (`POST /completions`).

mod normalize;
mod openai;

pub use normalize::replace_non_ascii;
pub use openai::{
    CompletionBody, CompletionBodyBuilder, CompletionChoice, CompletionResponse, CompletionUsage,
    API_KEY_ENV_VAR, BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV_VAR,
    OpenAICompletionClient, env_override,
};
