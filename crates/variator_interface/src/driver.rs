//! Completion provider trait.

use async_trait::async_trait;
use variator_core::{Completion, GenerationRequest};
use variator_error::VariatorResult;

/// A text completion capability.
///
/// Implementations issue one call to their provider per invocation and
/// never retry. Failures surface as `AuthenticationError` for credential
/// problems and `ServiceError` for everything the provider got wrong.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generates completions for the request.
    ///
    /// An empty vector means the provider answered with no choices.
    async fn complete(&self, request: &GenerationRequest) -> VariatorResult<Vec<Completion>>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for requests.
    fn model_name(&self) -> &str;
}
