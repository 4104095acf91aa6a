//! Similarity scoring trait.

/// Scores how close a candidate text is to a reference text.
pub trait SimilarityMetric: Send + Sync {
    /// Similarity in `[0.0, 1.0]`. Must not fail on any input.
    fn score(&self, reference: &str, candidate: &str) -> f64;

    /// Short metric name for logging.
    fn name(&self) -> &'static str;
}
