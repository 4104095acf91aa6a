//! Completion output type.

use serde::{Deserialize, Serialize};

/// One text completion returned by the completion service.
///
/// # Examples
///
/// ```
/// use variator_core::Completion;
///
/// let completion = Completion::new(0, "Kyiv is the capital of Ukraine.");
/// assert_eq!(*completion.index(), 0);
/// assert!(completion.text().starts_with("Kyiv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Completion {
    /// Position of the choice in the service response
    index: u32,
    /// Generated text, already normalized by the driver
    text: String,
}

impl Completion {
    /// Creates a new completion.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Consumes the completion, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
