//! Read-only document model.
//!
//! The loader converts `word/document.xml` into these structures and the
//! extractor walks them. Nothing here is mutated once loading finishes.

mod document;
mod paragraph;
mod table;

pub use document::*;
pub use paragraph::*;
pub use table::*;
