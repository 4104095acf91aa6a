//! Prompt variation generation.

use tracing::{debug, instrument, warn};
use variator_analysis::split_enumeration;
use variator_core::{Enumeration, GenerationDefaults};
use variator_error::{ServiceError, ServiceErrorKind, VariatorResult};
use variator_interface::CompletionDriver;

/// Number of variations requested when none is configured.
pub const DEFAULT_VARIATION_COUNT: usize = 10;

/// Asks a completion model for meaning-preserving rewrites of a question.
#[derive(Debug, Clone)]
pub struct PromptVariator<D: CompletionDriver> {
    driver: D,
    defaults: GenerationDefaults,
    variation_count: usize,
}

impl<D: CompletionDriver> PromptVariator<D> {
    /// Creates a variator requesting [`DEFAULT_VARIATION_COUNT`] variations.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            defaults: GenerationDefaults::default(),
            variation_count: DEFAULT_VARIATION_COUNT,
        }
    }

    /// Sets the generation defaults used for the variation request.
    pub fn with_defaults(mut self, defaults: GenerationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets how many variations to ask for.
    pub fn with_variation_count(mut self, count: usize) -> Self {
        self.variation_count = count;
        self
    }

    /// Instruction prompt asking for `count` variations of `question`.
    pub fn variation_prompt(question: &str, count: usize) -> String {
        format!(
            "You are a master Linguist and writer with a creative mind. \
             Provide {} variations of the following phrase without changing its meaning. {}",
            count, question
        )
    }

    /// Requests variations of `question` and parses them out of the response.
    ///
    /// The request echoes the prompt, so the instruction usually ends up in
    /// the header of the returned enumeration.
    ///
    /// # Errors
    ///
    /// Propagates driver errors, and returns `ServiceError::EmptyResponse`
    /// when the model produced no completion.
    #[instrument(
        skip(self),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            count = self.variation_count,
        )
    )]
    pub async fn variations(&self, question: &str) -> VariatorResult<Enumeration> {
        let prompt = Self::variation_prompt(question, self.variation_count);
        let request = self.defaults.request(prompt).with_echo_prompt(true);

        let completion = self
            .driver
            .complete(&request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::new(ServiceErrorKind::EmptyResponse))?;

        let enumeration = split_enumeration(completion.text());
        if enumeration.is_empty() {
            warn!("Response contained no list of variations");
        } else {
            debug!(variations = enumeration.len(), "Parsed variations");
        }
        Ok(enumeration)
    }
}
