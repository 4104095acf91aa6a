//! Type conversions between Variator and the completions wire format.

use crate::normalize::replace_non_ascii;
use crate::openai::dto::{ApiErrorEnvelope, CompletionBody, CompletionResponse};
use variator_core::{Completion, GenerationRequest};
use variator_error::RequestError;

/// Converts a Variator GenerationRequest to a completions request body.
pub fn to_completion_body(
    req: &GenerationRequest,
    model: &str,
) -> Result<CompletionBody, RequestError> {
    CompletionBody::builder()
        .model(model)
        .prompt(req.prompt().as_str())
        .temperature(*req.temperature())
        .max_tokens(*req.max_tokens())
        .n(*req.sample_count())
        .stop(req.stop_sequence().clone())
        .presence_penalty(*req.presence_penalty())
        .frequency_penalty(*req.frequency_penalty())
        .best_of(*req.best_of())
        .echo(*req.echo_prompt())
        .build()
        .map_err(|e| RequestError::new(format!("Failed to build request body: {}", e)))
}

/// Converts a completions response into normalized completions ordered by index.
pub fn from_completion_response(response: CompletionResponse) -> Vec<Completion> {
    let mut completions: Vec<Completion> = response
        .choices
        .into_iter()
        .map(|choice| Completion::new(choice.index, replace_non_ascii(&choice.text)))
        .collect();
    completions.sort_by_key(|c| *c.index());
    completions
}

/// Extracts the human-readable message from an error response body.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
