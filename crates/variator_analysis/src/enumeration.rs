//! Header and list item extraction from free text.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};
use variator_core::Enumeration;

/// A list marker (`-`, `+`, `*` or `<digits>.`) at the start of a line,
/// followed by whitespace or the end of the line.
static MARKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:[-+*]|\d+\.)(?:[ \t]+(?P<body>.*))?$").expect("marker pattern is valid")
});

/// Splits text into a header and the items of the list that follows it.
///
/// The header is everything before the first marker line, trimmed. Each item
/// is a marker line with its marker removed, extended by any non-blank,
/// non-marker lines that directly follow it. Items with an empty body are
/// dropped. Text without a marker line yields an empty enumeration; this
/// never fails.
///
/// # Examples
///
/// ```
/// use variator_analysis::split_enumeration;
///
/// let parsed = split_enumeration(
///     "Here are some variations:\n1. What city is Ukraine's capital?\n2. Name Ukraine's capital city.\n",
/// );
/// assert_eq!(parsed.header(), "Here are some variations:");
/// assert_eq!(
///     parsed.items(),
///     &["What city is Ukraine's capital?", "Name Ukraine's capital city."]
/// );
/// ```
#[instrument(skip(text), fields(chars = text.len()))]
pub fn split_enumeration(text: &str) -> Enumeration {
    let mut header_lines: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut seen_marker = false;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');

        if let Some(captures) = MARKER_LINE.captures(line) {
            seen_marker = true;
            flush(&mut current, &mut items);
            let body = captures.name("body").map_or("", |m| m.as_str()).trim();
            current = Some(body.to_string());
            continue;
        }

        if !seen_marker {
            header_lines.push(line);
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current, &mut items);
        } else if let Some(item) = current.as_mut() {
            if !item.is_empty() {
                item.push(' ');
            }
            item.push_str(trimmed);
        }
    }
    flush(&mut current, &mut items);

    if !seen_marker {
        debug!("No list marker found");
        return Enumeration::default();
    }

    let header = header_lines.join("\n").trim().to_string();
    debug!(items = items.len(), header_chars = header.len(), "Parsed enumeration");
    Enumeration::new(header, items)
}

fn flush(current: &mut Option<String>, items: &mut Vec<String>) {
    if let Some(item) = current.take() {
        if !item.is_empty() {
            items.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_requires_separator() {
        let parsed = split_enumeration("Intro\n-5 degrees\n1.5 million\n- real item");
        assert_eq!(parsed.items(), &["real item"]);
        assert_eq!(parsed.header(), "Intro\n-5 degrees\n1.5 million");
    }

    #[test]
    fn bare_marker_line_is_dropped() {
        let parsed = split_enumeration("Header:\n1.\n2. kept");
        assert_eq!(parsed.header(), "Header:");
        assert_eq!(parsed.items(), &["kept"]);
    }

    #[test]
    fn carriage_returns_are_ignored() {
        let parsed = split_enumeration("Head\r\n* one\r\n* two\r\n");
        assert_eq!(parsed.items(), &["one", "two"]);
    }
}
