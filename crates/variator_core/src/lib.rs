//! Core data types for the Variator prompt robustness toolkit.
//!
//! This crate provides the data model shared by the completion drivers,
//! the text analysis routines and the orchestration layer.

mod completion;
mod defaults;
mod enumeration;
mod observability;
mod request;
mod scored;

pub use completion::Completion;
pub use defaults::GenerationDefaults;
pub use enumeration::Enumeration;
pub use observability::{LogFormat, init_tracing};
pub use request::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationRequest, GenerationRequestBuilder,
};
pub use scored::{ScoredVariation, ScoredVariations};
