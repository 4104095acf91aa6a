//! Answer collection and similarity ranking.

use tracing::{debug, instrument};
use variator_analysis::TfidfScorer;
use variator_core::{GenerationDefaults, ScoredVariation, ScoredVariations};
use variator_error::{ServiceError, ServiceErrorKind, VariatorResult};
use variator_interface::{CompletionDriver, SimilarityMetric};

/// Answers each prompt and scores the answer against its prompt.
#[derive(Debug, Clone)]
pub struct Comparator<D: CompletionDriver, M: SimilarityMetric = TfidfScorer> {
    driver: D,
    metric: M,
    defaults: GenerationDefaults,
}

impl<D: CompletionDriver> Comparator<D, TfidfScorer> {
    /// Creates a comparator using TF-IDF cosine similarity.
    pub fn new(driver: D) -> Self {
        Self::with_metric(driver, TfidfScorer)
    }
}

impl<D: CompletionDriver, M: SimilarityMetric> Comparator<D, M> {
    /// Creates a comparator with a custom similarity metric.
    pub fn with_metric(driver: D, metric: M) -> Self {
        Self {
            driver,
            metric,
            defaults: GenerationDefaults::default(),
        }
    }

    /// Sets the generation defaults used for answer requests.
    pub fn with_defaults(mut self, defaults: GenerationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Similarity between a question and an answer.
    pub fn compute_similarity(&self, question: &str, answer: &str) -> f64 {
        self.metric.score(question, answer)
    }

    /// Answers every prompt in order and ranks the results by descending score.
    ///
    /// Calls are issued one at a time; the first failure aborts the run.
    #[instrument(
        skip(self, prompts),
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            prompts = prompts.len(),
            metric = self.metric.name(),
        )
    )]
    pub async fn compare(&self, prompts: &[String]) -> VariatorResult<ScoredVariations> {
        let mut results = ScoredVariations::new();

        for prompt in prompts {
            let request = self.defaults.request(prompt.as_str());
            let completion = self
                .driver
                .complete(&request)
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| ServiceError::new(ServiceErrorKind::EmptyResponse))?
                .into_text();

            let score = self.compute_similarity(prompt, &completion);
            debug!(score, "Scored completion");
            results.push(ScoredVariation::new(prompt.as_str(), completion, score));
        }

        results.sort_by_score_descending();
        Ok(results)
    }
}
