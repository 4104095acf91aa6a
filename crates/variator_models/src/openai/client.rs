//! Client for OpenAI-compatible completion endpoints.

use crate::openai::conversions;
use crate::openai::dto::CompletionResponse;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument};
use variator_core::{Completion, GenerationDefaults, GenerationRequest};
use variator_error::{AuthenticationError, ServiceError, ServiceErrorKind, VariatorResult};
use variator_interface::CompletionDriver;

/// Base URL used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when `OPENAI_COMPLETION_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

/// Environment variable overriding the model.
pub const MODEL_ENV_VAR: &str = "OPENAI_COMPLETION_MODEL";

const PROVIDER_NAME: &str = "openai";

/// Value of an environment variable, or `None` when unset or blank.
pub fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Client for the legacy `POST /completions` endpoint.
///
/// The API key is optional at construction; a missing key surfaces as an
/// authentication error on the first call.
#[derive(Clone)]
pub struct OpenAICompletionClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    defaults: GenerationDefaults,
}

impl std::fmt::Debug for OpenAICompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompletionClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl OpenAICompletionClient {
    /// Creates a new completions client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication, if available
    /// * `model` - Model identifier
    /// * `base_url` - Base URL of the API, without the `/completions` suffix
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let model = model.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        debug!(
            provider = PROVIDER_NAME,
            model = %model,
            url = %base_url,
            has_api_key = api_key.is_some(),
            "Created completions client"
        );

        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            defaults: GenerationDefaults::default(),
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (optional here, required by the first call)
    /// - `OPENAI_BASE_URL` (default: [`DEFAULT_BASE_URL`])
    /// - `OPENAI_COMPLETION_MODEL` (default: [`DEFAULT_MODEL`])
    pub fn from_env() -> Self {
        let base_url =
            env_override(BASE_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = env_override(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::new(Self::api_key_from_env(), model, base_url)
    }

    /// API key from `OPENAI_API_KEY`, ignoring a blank value.
    pub fn api_key_from_env() -> Option<String> {
        env_override(API_KEY_ENV_VAR)
    }

    /// Returns a copy of this client with different default parameters.
    pub fn with_defaults(mut self, defaults: GenerationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns a copy of this client with a different default maximum length.
    pub fn with_max_length(mut self, max_tokens: u32) -> Self {
        self.defaults = self.defaults.with_max_tokens(max_tokens);
        self
    }

    /// Returns a copy of this client with a different default temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.defaults = self.defaults.with_temperature(temperature);
        self
    }

    /// Returns a copy of this client with a different default stop sequence.
    pub fn with_stop_sequence(mut self, stop_sequence: Option<String>) -> Self {
        self.defaults = self.defaults.with_stop_sequence(stop_sequence);
        self
    }

    /// Current default parameters.
    pub fn defaults(&self) -> &GenerationDefaults {
        &self.defaults
    }

    /// Builds a request for `prompt` from the client's defaults.
    pub fn request(&self, prompt: impl Into<String>) -> GenerationRequest {
        self.defaults.request(prompt)
    }

    /// Full URL of the completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }

    fn api_key(&self) -> Result<&str, AuthenticationError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AuthenticationError::new("OPENAI_API_KEY environment variable not set"))
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompletionClient {
    #[instrument(
        skip(self, request),
        fields(provider = PROVIDER_NAME, model = %self.model, samples = request.sample_count())
    )]
    async fn complete(&self, request: &GenerationRequest) -> VariatorResult<Vec<Completion>> {
        request.validate()?;
        let api_key = self.api_key()?;
        let body = conversions::to_completion_body(request, &self.model)?;

        debug!(
            prompt_chars = request.prompt().len(),
            max_tokens = request.max_tokens(),
            echo = request.echo_prompt(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER_NAME, error = ?e, "HTTP request failed");
                ServiceError::new(ServiceErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = conversions::api_error_message(&error_text);
            error!(
                provider = PROVIDER_NAME,
                status = %status,
                error = %message,
                "API error"
            );

            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(AuthenticationError::new(message).into());
            }

            return Err(ServiceError::new(ServiceErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let completion_response: CompletionResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER_NAME, error = ?e, "Failed to parse response");
            ServiceError::new(ServiceErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(usage) = &completion_response.usage {
            debug!(
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = ?usage.total_tokens,
                "Token usage"
            );
        }
        debug!(
            choices = completion_response.choices.len(),
            "Received response"
        );

        Ok(conversions::from_completion_response(completion_response))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
