//! # docxtext
//!
//! Plain text extraction from Microsoft Word (.docx) documents.
//!
//! A document is loaded into a small read-only model (top-level paragraphs
//! and tables of rows of cells of paragraphs) and the extractor walks it:
//! every top-level paragraph first, then every table cell paragraph, one
//! line each, joined by `\n`.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Simple text extraction
//! let text = docxtext::extract_file("document.docx")?;
//! std::fs::write("document.txt", text)?;
//!
//! // Load once, extract with options
//! use docxtext::extract::{ExtractOptions, TableOrder};
//!
//! let doc = docxtext::load_file("document.docx")?;
//! println!("Paragraphs: {}", doc.paragraphs.len());
//! println!("Tables: {}", doc.tables.len());
//!
//! let options = ExtractOptions::new().with_table_order(TableOrder::Interleaved);
//! let text = docxtext::extract::extract_text_with_options(&doc, &options);
//! # Ok::<(), docxtext::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async file loading with Tokio

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod extract;
pub mod model;

// Re-exports
pub use container::OoxmlContainer;
pub use detect::{detect_format_from_bytes, detect_format_from_path, FormatType};
pub use error::{Error, Result};
pub use extract::{extract_text, ExtractOptions, MergedCells, TableOrder};
pub use model::{Block, Cell, Document, Paragraph, Row, Table, VerticalMerge};

use std::path::Path;

/// Load a Word document file into a Document model.
///
/// Fails if the file cannot be read, is not a ZIP package, is not a Word
/// document or its main part is malformed.
///
/// # Example
///
/// ```no_run
/// let doc = docxtext::load_file("document.docx")?;
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// # Ok::<(), docxtext::Error>(())
/// ```
pub fn load_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading document");
    docx::DocxParser::open(path)?.parse()
}

/// Load a Word document from bytes.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.docx")?;
/// let doc = docxtext::load_bytes(&data)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_bytes(data: &[u8]) -> Result<Document> {
    docx::DocxParser::from_bytes(data.to_vec())?.parse()
}

/// Load a Word document file without blocking the async runtime.
#[cfg(feature = "async")]
pub async fn load_file_async(path: impl AsRef<Path>) -> Result<Document> {
    let data = tokio::fs::read(path.as_ref()).await?;
    load_bytes(&data)
}

/// Extract plain text from a Word document file.
///
/// # Example
///
/// ```no_run
/// let text = docxtext::extract_file("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), docxtext::Error>(())
/// ```
pub fn extract_file(path: impl AsRef<Path>) -> Result<String> {
    let doc = load_file(path)?;
    Ok(extract::extract_text(&doc))
}

/// Extract plain text from a Word document file with options.
pub fn extract_file_with_options(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<String> {
    let doc = load_file(path)?;
    Ok(extract::extract_text_with_options(&doc, options))
}
