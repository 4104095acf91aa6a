//! OpenAI-compatible legacy completions API.

mod client;
mod conversions;
mod dto;

pub use client::{
    API_KEY_ENV_VAR, BASE_URL_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_ENV_VAR,
    OpenAICompletionClient, env_override,
};
pub use dto::{
    CompletionBody, CompletionBodyBuilder, CompletionChoice, CompletionResponse, CompletionUsage,
};
