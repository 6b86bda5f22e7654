//! Table model structures.

use super::Paragraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vertical merge state of a cell (`w:vMerge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// First cell of a vertically merged range; holds the content.
    Restart,
    /// Covered by the cell above at the same grid column.
    Continue,
}

/// A cell in a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Paragraphs that are direct children of the cell
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Number of layout-grid columns this cell covers (`w:gridSpan`)
    #[serde(default = "default_span", skip_serializing_if = "is_default_span")]
    pub grid_span: u32,

    /// Vertical merge state (`w:vMerge`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_merge: Option<VerticalMerge>,
}

fn default_span() -> u32 {
    1
}

fn is_default_span(n: &u32) -> bool {
    *n == 1
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            grid_span: 1,
            v_merge: None,
        }
    }
}

impl Cell {
    /// Create a new empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell holding a single paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
            ..Default::default()
        }
    }

    /// Create a cell from paragraph texts.
    pub fn with_paragraphs<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: texts.into_iter().map(Paragraph::with_text).collect(),
            ..Default::default()
        }
    }

    /// Set the horizontal span in grid columns.
    pub fn spanning(mut self, grid_span: u32) -> Self {
        self.grid_span = grid_span;
        self
    }

    /// Set the vertical merge state.
    pub fn merged(mut self, v_merge: VerticalMerge) -> Self {
        self.v_merge = Some(v_merge);
        self
    }

    /// Check if this cell continues a vertical merge from the row above.
    pub fn is_merge_continuation(&self) -> bool {
        self.v_merge == Some(VerticalMerge::Continue)
    }

    /// Grid columns covered, never less than one.
    pub fn span(&self) -> usize {
        self.grid_span.max(1) as usize
    }
}

/// A row in a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cells in this row
    #[serde(default)]
    pub cells: Vec<Cell>,

    /// Grid columns skipped before the first cell (`w:gridBefore`)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub grid_before: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cells.
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            grid_before: 0,
        }
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

/// A table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in this table
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Resolve every row against the layout grid.
    ///
    /// A cell spanning N grid columns appears N times. A vertical-merge
    /// continuation resolves to the cell that starts the merge in the row
    /// above at the same grid offset, so merged content is repeated on every
    /// row it covers. A continuation with nothing above it stands for itself.
    pub fn grid_rows(&self) -> Vec<Vec<&Cell>> {
        let mut resolved = Vec::with_capacity(self.rows.len());
        // Grid offset -> content cell, for the previous row
        let mut above: HashMap<usize, &Cell> = HashMap::new();

        for row in &self.rows {
            let mut offset = row.grid_before as usize;
            let mut current = HashMap::new();
            let mut cells = Vec::new();

            for cell in &row.cells {
                let origin = if cell.is_merge_continuation() {
                    above.get(&offset).copied().unwrap_or(cell)
                } else {
                    cell
                };
                cells.extend(std::iter::repeat_n(origin, cell.span()));
                current.insert(offset, origin);
                offset += cell.span();
            }

            above = current;
            resolved.push(cells);
        }

        resolved
    }
}
