//! Client-level generation defaults.

use crate::GenerationRequest;
use crate::request::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};

/// Default generation parameters held by a completion client.
///
/// Every request derived through [`GenerationDefaults::request`] starts from
/// these values. Changing a default produces a new value, so a client's
/// configuration never shifts between calls.
///
/// # Examples
///
/// ```
/// use variator_core::GenerationDefaults;
///
/// let defaults = GenerationDefaults::default().with_temperature(0.9);
/// let request = defaults.request("Name Ukraine's capital city.");
///
/// assert_eq!(*request.temperature(), 0.9);
/// assert_eq!(*request.max_tokens(), 2000);
/// assert_eq!(*request.sample_count(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GenerationDefaults {
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature (0.0 to 1.0)
    temperature: f32,
    /// Sequence at which the service stops generating
    stop_sequence: Option<String>,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            stop_sequence: None,
        }
    }
}

impl GenerationDefaults {
    /// Builds a single-sample request for `prompt` from these defaults.
    pub fn request(&self, prompt: impl Into<String>) -> GenerationRequest {
        GenerationRequest::new(prompt)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_stop_sequence(self.stop_sequence.clone())
    }
}
