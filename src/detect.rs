//! Format detection for Office Open XML packages.
//!
//! Only Word documents can be loaded, but spreadsheets and presentations
//! are recognized so the error names what was actually given.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use std::path::Path;

/// Content type for DOCX main document part.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Content type for macro-enabled DOCM main document part.
const DOCM_CONTENT_TYPE: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";

/// Content type for XLSX workbook part.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";

/// Content type for PPTX presentation part.
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Detected Office package format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Microsoft Word document (.docx)
    Docx,
    /// Microsoft Excel workbook (.xlsx)
    Xlsx,
    /// Microsoft PowerPoint presentation (.pptx)
    Pptx,
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Docx => "docx",
            FormatType::Xlsx => "xlsx",
            FormatType::Pptx => "pptx",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Docx => "Word Document",
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Pptx => "PowerPoint Presentation",
        }
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the format of an opened container.
///
/// Inspects `[Content_Types].xml`, falling back to the package folder
/// layout when the content types are inconclusive.
pub fn detect_format(container: &OoxmlContainer) -> Result<FormatType> {
    let content_types = container
        .read_xml("[Content_Types].xml")
        .map_err(|_| Error::MissingComponent("[Content_Types].xml".to_string()))?;

    if content_types.contains(DOCX_CONTENT_TYPE) || content_types.contains(DOCM_CONTENT_TYPE) {
        Ok(FormatType::Docx)
    } else if content_types.contains(XLSX_CONTENT_TYPE) {
        Ok(FormatType::Xlsx)
    } else if content_types.contains(PPTX_CONTENT_TYPE) {
        Ok(FormatType::Pptx)
    } else {
        detect_by_folder_structure(&container.list_files())
    }
}

/// Detect the format type from a file path.
///
/// # Example
///
/// ```no_run
/// use docxtext::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), docxtext::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<FormatType> {
    let container = OoxmlContainer::open(path)?;
    detect_format(&container)
}

/// Detect the format type from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    let container = OoxmlContainer::from_bytes(data.to_vec())?;
    detect_format(&container)
}

/// Fallback detection by checking folder structure.
fn detect_by_folder_structure(names: &[String]) -> Result<FormatType> {
    let has_word = names.iter().any(|n| n.starts_with("word/"));
    let has_xl = names.iter().any(|n| n.starts_with("xl/"));
    let has_ppt = names.iter().any(|n| n.starts_with("ppt/"));

    match (has_word, has_xl, has_ppt) {
        (true, false, false) => Ok(FormatType::Docx),
        (false, true, false) => Ok(FormatType::Xlsx),
        (false, false, true) => Ok(FormatType::Pptx),
        _ => Err(Error::UnknownFormat),
    }
}
