//! Text normalization applied to provider output.

/// Replaces every run of non-ASCII characters with a single space.
///
/// This is lossy: accented and non-Latin text is destroyed. Scores are
/// computed on the normalized text, so changing this changes results.
///
/// # Examples
///
/// ```
/// use variator_models::replace_non_ascii;
///
/// assert_eq!(replace_non_ascii("Kyiv \u{2014} capital"), "Kyiv   capital");
/// assert_eq!(replace_non_ascii("Київ"), " ");
/// assert_eq!(replace_non_ascii("plain"), "plain");
/// ```
pub fn replace_non_ascii(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii() {
            normalized.push(ch);
            in_run = false;
        } else if !in_run {
            normalized.push(' ');
            in_run = true;
        }
    }
    normalized
}
