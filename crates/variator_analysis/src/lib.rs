//! Text analysis for Variator.
//!
//! Splits model output into a header and list items, and scores prompt and
//! completion pairs with TF-IDF cosine similarity.

mod enumeration;
mod similarity;
mod stop_words;
mod tokenize;

pub use enumeration::split_enumeration;
pub use similarity::{TfidfScorer, cosine_similarity, score};
pub use stop_words::is_stop_word;
pub use tokenize::{terms, tokenize};
