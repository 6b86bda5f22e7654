//! Paragraph model.

use serde::{Deserialize, Serialize};

/// A block of text; the smallest text-bearing unit of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Concatenated run text. Empty for blank paragraphs.
    #[serde(default)]
    pub text: String,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if this paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Self { text }
    }
}
