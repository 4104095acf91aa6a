//! TF-IDF cosine similarity between two texts.

use crate::tokenize::terms;
use std::collections::BTreeMap;
use variator_interface::SimilarityMetric;

/// Sparse term vector keyed by term.
type TermVector = BTreeMap<String, f64>;

/// Lexical similarity over a two-document TF-IDF model.
///
/// Weights are raw term counts times the smoothed inverse document
/// frequency `ln((1 + n) / (1 + df)) + 1`, with each vector L2-normalized.
/// Stop words and single-character tokens carry no weight. A text with no
/// remaining terms scores `0.0` against anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfScorer;

impl SimilarityMetric for TfidfScorer {
    fn score(&self, reference: &str, candidate: &str) -> f64 {
        let documents = [terms(reference), terms(candidate)];
        let vectors = tfidf_vectors(&documents);
        cosine_similarity(&vectors[0], &vectors[1])
    }

    fn name(&self) -> &'static str {
        "tfidf-cosine"
    }
}

/// Scores `candidate` against `reference` with [`TfidfScorer`].
///
/// # Examples
///
/// ```
/// use variator_analysis::score;
///
/// let related = score("What is the capital of Ukraine?", "The capital of Ukraine is Kyiv.");
/// let unrelated = score("What is the capital of Ukraine?", "Bananas are yellow.");
/// assert!(related > unrelated);
/// assert_eq!(score("", "anything"), 0.0);
/// ```
pub fn score(reference: &str, candidate: &str) -> f64 {
    TfidfScorer.score(reference, candidate)
}

fn tfidf_vectors(documents: &[Vec<String>]) -> Vec<TermVector> {
    let n = documents.len() as f64;

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for document in documents {
        let mut seen: Vec<&str> = document.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *document_frequency.entry(term).or_default() += 1;
        }
    }

    documents
        .iter()
        .map(|document| {
            let mut vector = TermVector::new();
            for term in document {
                *vector.entry(term.clone()).or_default() += 1.0;
            }
            for (term, weight) in vector.iter_mut() {
                let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
                *weight *= ((1.0 + n) / (1.0 + df)).ln() + 1.0;
            }
            normalize(&mut vector);
            vector
        })
        .collect()
}

fn normalize(vector: &mut TermVector) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        vector.values_mut().for_each(|w| *w /= norm);
    }
}

/// Cosine similarity of two sparse vectors, clamped into `[0.0, 1.0]`.
///
/// Returns `0.0` when either vector is all zero.
pub fn cosine_similarity(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
