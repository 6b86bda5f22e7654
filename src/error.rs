//! Error types for the docxtext library.

use std::io;
use thiserror::Error;

/// Result type alias for docxtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a document.
///
/// Extraction itself never fails; every variant comes from reading the
/// file or decoding the package.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not an Office Open XML package.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The package is recognized but is not a Word document.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
