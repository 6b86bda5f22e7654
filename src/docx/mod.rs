//! DOCX (Word) document parser.
//!
//! This module loads Microsoft Word documents in the Office Open XML
//! (.docx) format into the read-only [`Document`](crate::model::Document) model.

mod parser;

pub use parser::{parse_document_xml, DocxParser};
