//! Word tokenization.

use crate::stop_words::is_stop_word;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Lowercases `text` and returns its tokens of two or more word characters.
///
/// # Examples
///
/// ```
/// use variator_analysis::tokenize;
///
/// assert_eq!(tokenize("Ukraine's capital, Kyiv!"), ["ukraine", "capital", "kyiv"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens of `text` with English stop words removed.
pub fn terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .collect()
}
