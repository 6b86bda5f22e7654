//! Plain text extraction from a loaded document.
//!
//! # Example
//!
//! ```no_run
//! use docxtext::{load_file, extract::*};
//!
//! let doc = load_file("document.docx")?;
//!
//! // Top-level paragraphs, then every table cell paragraph
//! let text = extract_text(&doc);
//!
//! // Tables at their position in the body
//! let options = ExtractOptions::new().with_table_order(TableOrder::Interleaved);
//! let text = extract_text_with_options(&doc, &options);
//! # Ok::<(), docxtext::Error>(())
//! ```

mod options;
mod text;

pub use options::{ExtractOptions, MergedCells, TableOrder};
pub use text::{extract, extract_text, extract_text_with_options, extract_with_options};
