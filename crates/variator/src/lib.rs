//! Prompt robustness exploration.
//!
//! Asks a completion model for paraphrases of a question, answers every
//! paraphrase, and ranks the answers by TF-IDF similarity to the prompt
//! that produced them.

mod comparator;
mod config;
mod pipeline;
mod report;
mod variator;

pub use comparator::Comparator;
pub use config::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, DEFAULT_QUESTION, VariatorConfig};
pub use pipeline::{PipelineReport, VariationPipeline};
pub use report::{format_variations, render_table};
pub use variator::{DEFAULT_VARIATION_COUNT, PromptVariator};

pub use variator_analysis::{TfidfScorer, score, split_enumeration};
pub use variator_core::{
    Completion, Enumeration, GenerationDefaults, GenerationRequest, LogFormat, ScoredVariation,
    ScoredVariations, init_tracing,
};
pub use variator_error::{
    AuthenticationError, ConfigError, RequestError, ServiceError, ServiceErrorKind, VariatorError,
    VariatorErrorKind, VariatorResult,
};
pub use variator_interface::{CompletionDriver, SimilarityMetric};
pub use variator_models::OpenAICompletionClient;
