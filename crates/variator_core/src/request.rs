//! Generation request type.

use serde::{Deserialize, Serialize};
use variator_error::RequestError;

/// Maximum tokens generated when no limit is given.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Sampling temperature used when none is given.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Parameters for one call to the completion service.
///
/// Requests are immutable values. Adjust one with the `with_*` methods,
/// each of which returns a new request.
///
/// # Examples
///
/// ```
/// use variator_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("What is the capital of Ukraine?")
///     .max_tokens(256u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.sample_count(), &1);
/// assert!(request.validate().is_ok());
///
/// let echoed = request.clone().with_echo_prompt(true);
/// assert!(*echoed.echo_prompt());
/// assert!(!*request.echo_prompt());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Prompt text sent to the model
    #[setters(into)]
    prompt: String,
    /// Maximum number of tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Sequence at which the service stops generating
    #[builder(default)]
    stop_sequence: Option<String>,
    /// Number of completions to generate
    #[builder(default = "1")]
    sample_count: u32,
    /// Penalty for tokens already present in the text so far
    #[builder(default)]
    presence_penalty: f32,
    /// Penalty proportional to how often a token already appeared
    #[builder(default)]
    frequency_penalty: f32,
    /// Number of server-side candidates to pick the best from
    #[builder(default = "1")]
    best_of: u32,
    /// Whether the prompt is echoed at the start of each completion
    #[builder(default)]
    echo_prompt: bool,
}

impl GenerationRequest {
    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Creates a single-sample request for `prompt` with the default parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            stop_sequence: None,
            sample_count: 1,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            best_of: 1,
            echo_prompt: false,
        }
    }

    /// Checks the request against the constraints of the completion service.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the prompt is blank, a count is zero,
    /// `best_of` is smaller than `sample_count`, or the temperature lies
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.prompt.trim().is_empty() {
            return Err(RequestError::new("prompt must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(RequestError::new("max_tokens must be at least 1"));
        }
        if self.sample_count == 0 {
            return Err(RequestError::new("sample_count must be at least 1"));
        }
        if self.best_of == 0 {
            return Err(RequestError::new("best_of must be at least 1"));
        }
        if self.best_of < self.sample_count {
            return Err(RequestError::new(format!(
                "best_of ({}) must not be smaller than sample_count ({})",
                self.best_of, self.sample_count
            )));
        }
        if !self.temperature.is_finite() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(RequestError::new(format!(
                "temperature {} is outside [0, 1]",
                self.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::builder()
            .prompt(prompt)
            .build()
            .expect("prompt is the only required field")
    }

    #[test]
    fn builder_applies_service_defaults() {
        let req = request("hello");
        assert_eq!(*req.max_tokens(), 2000);
        assert_eq!(*req.temperature(), 0.5);
        assert_eq!(*req.stop_sequence(), None);
        assert_eq!(*req.sample_count(), 1);
        assert_eq!(*req.best_of(), 1);
        assert!(!*req.echo_prompt());
    }

    #[test]
    fn new_matches_builder_defaults() {
        assert_eq!(GenerationRequest::new("hello"), request("hello"));
    }

    #[test]
    fn builder_requires_prompt() {
        assert!(GenerationRequest::builder().build().is_err());
    }

    #[test]
    fn blank_prompt_is_rejected() {
        assert!(request("   \n").validate().is_err());
    }

    #[test]
    fn zero_counts_are_rejected() {
        assert!(request("q").with_max_tokens(0).validate().is_err());
        assert!(request("q").with_sample_count(0).validate().is_err());
        assert!(request("q").with_best_of(0).validate().is_err());
    }

    #[test]
    fn best_of_must_cover_sample_count() {
        let req = request("q").with_sample_count(3);
        assert!(req.validate().is_err());
        assert!(req.with_best_of(3).validate().is_ok());
    }

    #[test]
    fn temperature_outside_unit_interval_is_rejected() {
        assert!(request("q").with_temperature(1.5).validate().is_err());
        assert!(request("q").with_temperature(-0.1).validate().is_err());
        assert!(request("q").with_temperature(f32::NAN).validate().is_err());
        assert!(request("q").with_temperature(0.0).validate().is_ok());
        assert!(request("q").with_temperature(1.0).validate().is_ok());
    }
}
