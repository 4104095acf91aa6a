//! End-to-end variation pipeline.

use crate::{Comparator, PromptVariator};
use derive_getters::Getters;
use tracing::{info, instrument};
use variator_analysis::TfidfScorer;
use variator_core::{GenerationDefaults, ScoredVariations};
use variator_error::VariatorResult;
use variator_interface::{CompletionDriver, SimilarityMetric};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PipelineReport {
    /// Text that preceded the parsed variation list
    header: String,
    /// Parsed variations, in the order the model produced them
    variations: Vec<String>,
    /// Every prompt (question first) with its answer and score, best first
    results: ScoredVariations,
}

/// Generates variations of a question, answers them all, and ranks the answers.
#[derive(Debug, Clone)]
pub struct VariationPipeline<D: CompletionDriver + Clone, M: SimilarityMetric = TfidfScorer> {
    variator: PromptVariator<D>,
    comparator: Comparator<D, M>,
}

impl<D: CompletionDriver + Clone> VariationPipeline<D, TfidfScorer> {
    /// Creates a pipeline scoring with TF-IDF cosine similarity.
    pub fn new(driver: D) -> Self {
        Self::with_metric(driver, TfidfScorer)
    }
}

impl<D: CompletionDriver + Clone, M: SimilarityMetric> VariationPipeline<D, M> {
    /// Creates a pipeline with a custom similarity metric.
    pub fn with_metric(driver: D, metric: M) -> Self {
        Self {
            variator: PromptVariator::new(driver.clone()),
            comparator: Comparator::with_metric(driver, metric),
        }
    }

    /// Applies generation defaults to every request of the run.
    pub fn with_defaults(self, defaults: GenerationDefaults) -> Self {
        Self {
            variator: self.variator.with_defaults(defaults.clone()),
            comparator: self.comparator.with_defaults(defaults),
        }
    }

    /// Sets how many variations to ask for.
    pub fn with_variation_count(self, count: usize) -> Self {
        Self {
            variator: self.variator.with_variation_count(count),
            comparator: self.comparator,
        }
    }

    /// Runs the pipeline for `question`.
    ///
    /// The question itself is always answered and scored. When the model's
    /// response holds no parsable list, it is the only entry in the results.
    #[instrument(skip(self))]
    pub async fn run(&self, question: &str) -> VariatorResult<PipelineReport> {
        let (header, variations) = self.variator.variations(question).await?.into_parts();
        info!(variations = variations.len(), "Generated prompt variations");

        let prompts: Vec<String> = std::iter::once(question.to_string())
            .chain(variations.iter().cloned())
            .collect();
        let results = self.comparator.compare(&prompts).await?;
        info!(
            scored = results.len(),
            best = ?results.best().map(|v| *v.score()),
            "Scored variations"
        );

        Ok(PipelineReport {
            header,
            variations,
            results,
        })
    }
}
