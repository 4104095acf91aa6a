//! Tests for enumeration splitting.

use variator_analysis::split_enumeration;

#[test]
fn test_numbered_list_with_header() {
    let parsed = split_enumeration(
        "Here are some variations:\n1. What city is Ukraine's capital?\n2. Name Ukraine's capital city.\n",
    );

    assert_eq!(parsed.header(), "Here are some variations:");
    assert_eq!(
        parsed.items(),
        &["What city is Ukraine's capital?", "Name Ukraine's capital city."]
    );
}

#[test]
fn test_item_count_matches_marker_lines() {
    let text = "Variations:\n\n1. one\n2. two\n3. three\n4. four\n5. five\n6. six\n7. seven\n8. eight\n9. nine\n10. ten\n";
    let parsed = split_enumeration(text);

    let marker_lines = text
        .lines()
        .filter(|l| l.split_once(". ").is_some_and(|(n, _)| n.parse::<u32>().is_ok()))
        .count();
    assert_eq!(parsed.len(), marker_lines);
    assert_eq!(parsed.items().last().map(String::as_str), Some("ten"));
    for item in parsed.items() {
        assert_eq!(item.trim(), item);
        assert!(!item.starts_with(|c: char| c.is_ascii_digit()));
    }
}

#[test]
fn test_mixed_markers_and_blank_lines() {
    let parsed = split_enumeration("Options\n\n- alpha\n\n+ beta\n*   gamma  \n\n3. delta\n");

    assert_eq!(parsed.header(), "Options");
    assert_eq!(parsed.items(), &["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn test_wrapped_item_continues_until_blank_line() {
    let parsed = split_enumeration(
        "List:\n1. first part\n   continues here\n2. second\n\nTrailing remark.",
    );

    assert_eq!(parsed.items(), &["first part continues here", "second"]);
}

#[test]
fn test_multiline_header_is_trimmed() {
    let parsed = split_enumeration(
        "  You are a master Linguist.\nProvide 10 variations.\n\n- one\n",
    );

    assert_eq!(parsed.header(), "You are a master Linguist.\nProvide 10 variations.");
    assert_eq!(parsed.items(), &["one"]);
}

#[test]
fn test_list_without_header() {
    let parsed = split_enumeration("1. only\n2. items");

    assert_eq!(parsed.header(), "");
    assert_eq!(parsed.items(), &["only", "items"]);
}

#[test]
fn test_markerless_text_degrades_to_empty() {
    let parsed = split_enumeration("The capital of Ukraine is Kyiv.");

    assert!(parsed.is_empty());
    assert_eq!(parsed.header(), "");
}

#[test]
fn test_empty_input() {
    let parsed = split_enumeration("");

    assert!(parsed.is_empty());
    assert_eq!(parsed.header(), "");
}
