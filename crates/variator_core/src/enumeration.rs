//! Parsed enumeration type.

use serde::{Deserialize, Serialize};

/// A header sentence followed by an ordered list of items.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct Enumeration {
    /// Text preceding the first list item, trimmed (may be empty)
    header: String,
    /// List item bodies with their markers stripped, in source order
    items: Vec<String>,
}

impl Enumeration {
    /// True when no list item was found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of list items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Splits the enumeration into header and items.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.header, self.items)
    }
}
