//! Scored prompt/completion pairs.

use serde::{Deserialize, Serialize};

/// A prompt, the completion it produced, and their similarity score.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct ScoredVariation {
    /// Prompt sent to the model
    #[new(into)]
    prompt: String,
    /// Completion returned for the prompt
    #[new(into)]
    completion: String,
    /// Similarity between prompt and completion, in `[0.0, 1.0]`
    score: f64,
}

/// Ordered result set of scored variations.
///
/// Duplicates are kept: the model may legitimately return the same
/// variation twice.
///
/// # Examples
///
/// ```
/// use variator_core::{ScoredVariation, ScoredVariations};
///
/// let mut results: ScoredVariations = vec![
///     ScoredVariation::new("a", "x", 0.2),
///     ScoredVariation::new("b", "y", 0.9),
///     ScoredVariation::new("c", "z", 0.2),
/// ]
/// .into_iter()
/// .collect();
///
/// results.sort_by_score_descending();
/// let prompts: Vec<&str> = results.iter().map(|v| v.prompt().as_str()).collect();
/// assert_eq!(prompts, ["b", "a", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredVariations(Vec<ScoredVariation>);

impl ScoredVariations {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scored variation.
    pub fn push(&mut self, variation: ScoredVariation) {
        self.0.push(variation);
    }

    /// Sorts by descending score; equal scores keep their insertion order.
    pub fn sort_by_score_descending(&mut self) {
        self.0.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    /// Highest-ranked entry, assuming the set has been sorted.
    pub fn best(&self) -> Option<&ScoredVariation> {
        self.0.first()
    }

    /// Iterates over the entries in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredVariation> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ScoredVariation> for ScoredVariations {
    fn from_iter<I: IntoIterator<Item = ScoredVariation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ScoredVariations {
    type Item = ScoredVariation;
    type IntoIter = std::vec::IntoIter<ScoredVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScoredVariations {
    type Item = &'a ScoredVariation;
    type IntoIter = std::slice::Iter<'a, ScoredVariation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
