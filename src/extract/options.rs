//! Extraction options configuration.

/// Where table content goes relative to the top-level paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableOrder {
    /// All table content after all top-level paragraphs, whatever the
    /// tables' position in the body
    #[default]
    AfterParagraphs,
    /// Each table at its position among the top-level paragraphs
    Interleaved,
}

/// How merged table cells contribute their paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergedCells {
    /// Once per layout-grid position the cell covers, horizontally and
    /// vertically
    #[default]
    Repeat,
    /// Once per physical cell; vertical-merge continuations are skipped
    Once,
}

/// Options for extracting text.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Placement of table content
    pub table_order: TableOrder,

    /// Handling of merged cells
    pub merged_cells: MergedCells,
}

impl ExtractOptions {
    /// Create new extraction options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set table placement.
    pub fn with_table_order(mut self, order: TableOrder) -> Self {
        self.table_order = order;
        self
    }

    /// Set merged cell handling.
    pub fn with_merged_cells(mut self, merged: MergedCells) -> Self {
        self.merged_cells = merged;
        self
    }
}
