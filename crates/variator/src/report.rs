//! Console rendering of pipeline results.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use variator_core::ScoredVariations;

/// One-line listing of the generated variations.
pub fn format_variations(variations: &[String]) -> String {
    format!("Prompt variations: {:?}", variations)
}

/// Table of prompt, completion and score, in result order.
pub fn render_table(results: &ScoredVariations) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["prompt", "completion", "score"]);

    for variation in results {
        table.add_row(vec![
            Cell::new(variation.prompt()),
            Cell::new(variation.completion().trim()),
            Cell::new(format!("{:.4}", variation.score())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
