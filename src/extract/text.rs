//! Line extraction implementation.

use crate::model::{Block, Document, Table};

use super::options::{ExtractOptions, MergedCells, TableOrder};

/// Extract the text lines of a document with default options.
///
/// Every top-level paragraph yields one line, empty paragraphs included,
/// followed by one line per paragraph of every table cell (tables in order,
/// rows in order, cells in order).
///
/// # Example
///
/// ```
/// use docxtext::model::{Cell, Document, Paragraph, Row, Table};
///
/// let mut doc = Document::new();
/// doc.add_table(Table::with_rows(vec![Row::with_cells(vec![Cell::with_text("cell")])]));
/// doc.add_paragraph(Paragraph::with_text("body"));
///
/// assert_eq!(docxtext::extract::extract(&doc), vec!["body", "cell"]);
/// ```
pub fn extract(doc: &Document) -> Vec<&str> {
    extract_with_options(doc, &ExtractOptions::default())
}

/// Extract the text lines of a document.
pub fn extract_with_options<'a>(doc: &'a Document, options: &ExtractOptions) -> Vec<&'a str> {
    let mut lines = Vec::new();

    // A document assembled without layout has no body order to follow
    let interleave = options.table_order == TableOrder::Interleaved && !doc.layout.is_empty();

    if interleave {
        for block in &doc.layout {
            match *block {
                Block::Paragraph(i) => {
                    if let Some(para) = doc.paragraphs.get(i) {
                        lines.push(para.text.as_str());
                    }
                }
                Block::Table(i) => {
                    if let Some(table) = doc.tables.get(i) {
                        push_table(&mut lines, table, options.merged_cells);
                    }
                }
            }
        }
    } else {
        lines.extend(doc.paragraphs.iter().map(|p| p.text.as_str()));
        for table in &doc.tables {
            push_table(&mut lines, table, options.merged_cells);
        }
    }

    tracing::debug!(
        lines = lines.len(),
        paragraphs = doc.paragraphs.len(),
        tables = doc.tables.len(),
        "extracted text lines"
    );
    lines
}

/// Extract the text of a document with default options, one line per
/// paragraph joined by `\n`.
pub fn extract_text(doc: &Document) -> String {
    extract(doc).join("\n")
}

/// Extract the text of a document, one line per paragraph joined by `\n`.
pub fn extract_text_with_options(doc: &Document, options: &ExtractOptions) -> String {
    extract_with_options(doc, options).join("\n")
}

fn push_table<'a>(lines: &mut Vec<&'a str>, table: &'a Table, merged: MergedCells) {
    match merged {
        MergedCells::Repeat => {
            for row in table.grid_rows() {
                for cell in row {
                    lines.extend(cell.paragraphs.iter().map(|p| p.text.as_str()));
                }
            }
        }
        MergedCells::Once => {
            for row in &table.rows {
                for cell in row.cells.iter().filter(|c| !c.is_merge_continuation()) {
                    lines.extend(cell.paragraphs.iter().map(|p| p.text.as_str()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Paragraph, Row, VerticalMerge};

    fn doc_with_paragraphs(texts: &[&str]) -> Document {
        let mut doc = Document::new();
        for text in texts {
            doc.add_paragraph(Paragraph::with_text(*text));
        }
        doc
    }

    fn table(rows: &[&[&str]]) -> Table {
        Table::with_rows(
            rows.iter()
                .map(|cells| Row::with_cells(cells.iter().map(|t| Cell::with_text(*t)).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_paragraphs_only() {
        let doc = doc_with_paragraphs(&["one", "two", "three"]);

        assert_eq!(extract(&doc), vec!["one", "two", "three"]);
        assert_eq!(extract_text(&doc), "one\ntwo\nthree");
    }

    #[test]
    fn test_empty_paragraph_keeps_blank_line() {
        let doc = doc_with_paragraphs(&["A", "", "B"]);
        assert_eq!(extract_text(&doc), "A\n\nB");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(extract(&doc).is_empty());
        assert_eq!(extract_text(&doc), "");
    }

    #[test]
    fn test_single_empty_paragraph() {
        let doc = doc_with_paragraphs(&[""]);
        assert_eq!(extract(&doc), vec![""]);
        assert_eq!(extract_text(&doc), "");
    }

    #[test]
    fn test_tables_only_row_major() {
        let mut doc = Document::new();
        doc.add_table(table(&[&["a", "b"], &["c", "d"]]));
        doc.add_table(table(&[&["e"]]));

        assert_eq!(extract_text(&doc), "a\nb\nc\nd\ne");
    }

    #[test]
    fn test_cell_paragraphs_in_order() {
        let mut doc = Document::new();
        doc.add_table(Table::with_rows(vec![Row::with_cells(vec![
            Cell::with_paragraphs(["first", "", "third"]),
            Cell::new(),
            Cell::with_text("next"),
        ])]));

        assert_eq!(extract(&doc), vec!["first", "", "third", "next"]);
    }

    #[test]
    fn test_tables_follow_paragraphs() {
        let mut doc = Document::new();
        doc.add_table(table(&[&["cell"]]));
        doc.add_paragraph(Paragraph::with_text("intro"));
        doc.add_paragraph(Paragraph::with_text("outro"));

        assert_eq!(extract(&doc), vec!["intro", "outro", "cell"]);
    }

    #[test]
    fn test_interleaved_follows_layout() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("intro"));
        doc.add_table(table(&[&["cell"]]));
        doc.add_paragraph(Paragraph::with_text("outro"));

        let options = ExtractOptions::new().with_table_order(TableOrder::Interleaved);
        assert_eq!(
            extract_with_options(&doc, &options),
            vec!["intro", "cell", "outro"]
        );
    }

    #[test]
    fn test_interleaved_without_layout_falls_back() {
        let doc = Document {
            paragraphs: vec![Paragraph::with_text("p")],
            tables: vec![table(&[&["t"]])],
            layout: Vec::new(),
        };

        let options = ExtractOptions::new().with_table_order(TableOrder::Interleaved);
        assert_eq!(extract_with_options(&doc, &options), vec!["p", "t"]);
    }

    #[test]
    fn test_merged_cells_repeat_and_once() {
        let mut doc = Document::new();
        doc.add_table(Table::with_rows(vec![
            Row::with_cells(vec![
                Cell::with_text("wide").spanning(2),
                Cell::with_text("tall").merged(VerticalMerge::Restart),
            ]),
            Row::with_cells(vec![
                Cell::with_text("x"),
                Cell::with_text("y"),
                Cell::new().merged(VerticalMerge::Continue),
            ]),
        ]));

        assert_eq!(
            extract(&doc),
            vec!["wide", "wide", "tall", "x", "y", "tall"]
        );

        let once = ExtractOptions::new().with_merged_cells(MergedCells::Once);
        assert_eq!(
            extract_with_options(&doc, &once),
            vec!["wide", "tall", "x", "y"]
        );
    }

    #[test]
    fn test_extraction_does_not_mutate() {
        let mut doc = doc_with_paragraphs(&["a"]);
        doc.add_table(table(&[&["b"]]));
        let before = doc.to_json_compact().unwrap();

        let _ = extract_text(&doc);
        assert_eq!(doc.to_json_compact().unwrap(), before);
    }
}
