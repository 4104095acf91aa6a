//! Trait definitions for the Variator toolkit.
//!
//! The orchestration layer talks to a completion provider only through
//! [`CompletionDriver`] and to a scoring function only through
//! [`SimilarityMetric`], so either side can be swapped without touching
//! the other.

mod driver;
mod metric;

pub use driver::CompletionDriver;
pub use metric::SimilarityMetric;
