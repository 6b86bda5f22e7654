//! Document model structures.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Position of a top-level item in the document body.
///
/// Indices point into [`Document::paragraphs`] and [`Document::tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "lowercase")]
pub enum Block {
    /// A top-level paragraph
    Paragraph(usize),
    /// A top-level table
    Table(usize),
}

/// A loaded word-processing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables in document order
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Body order of the paragraphs and tables above
    #[serde(default)]
    pub layout: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level paragraph.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.layout.push(Block::Paragraph(self.paragraphs.len()));
        self.paragraphs.push(para);
    }

    /// Append a top-level table.
    pub fn add_table(&mut self, table: Table) {
        self.layout.push(Block::Table(self.tables.len()));
        self.tables.push(table);
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to JSON string (compact).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
