//! ZIP container abstraction for OOXML packages.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

/// Relationship type of the main document part.
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

/// Conventional location of the Word main document part.
pub const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";

/// A relationship entry from a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Rewrite a UTF-16 encoding declaration to UTF-8.
///
/// Once UTF-16 XML has been decoded into a Rust `String`, the declaration
/// still names UTF-16 and quick-xml would try to decode it a second time.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling different encodings (UTF-8, UTF-16 LE/BE).
///
/// Word writes UTF-8, but documents produced by other tools occasionally
/// carry UTF-16 parts, with or without a byte order mark.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(rest.to_vec())
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let content = decode_utf16(rest, u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let content = decode_utf16(rest, u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    // No BOM: UTF-8 first, then guess UTF-16 from the zero bytes of ASCII markup
    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                let content = decode_utf16(bytes, u16::from_le_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                let content = decode_utf16(bytes, u16::from_be_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Decode UTF-16 bytes with the given byte order. A trailing odd byte is dropped.
fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// OOXML container abstraction over a ZIP archive.
///
/// The whole package is read into memory up front, so the source file handle
/// is released before any part is parsed.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open an OOXML container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docxtext::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("document.docx")?;
    /// # Ok::<(), docxtext::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| with_path(e, path))?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| with_path(e, path))?;
        Self::from_bytes(data)
    }

    /// Create an OOXML container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if !is_zip_file(&data) {
            return Err(Error::UnknownFormat);
        }
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the archive as a string.
    ///
    /// Handles different encodings:
    /// - UTF-8 (with or without BOM)
    /// - UTF-16 LE (with BOM: FF FE)
    /// - UTF-16 BE (with BOM: FE FF)
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Read a part from the archive as raw bytes.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all part names in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// Read package-level relationships (`_rels/.rels`).
    ///
    /// A missing or empty relationships part yields an empty list.
    pub fn read_package_relationships(&self) -> Result<Vec<Relationship>> {
        let content = match self.read_xml("_rels/.rels") {
            Ok(c) => c,
            Err(_) => return Ok(Vec::new()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut rels = Vec::new();
        let mut reader = quick_xml::Reader::from_str(&content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut rel = Relationship {
                        id: String::new(),
                        rel_type: String::new(),
                        target: String::new(),
                        external: false,
                    };
                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value);
                        match attr.key.as_ref() {
                            b"Id" => rel.id = value.to_string(),
                            b"Type" => rel.rel_type = value.to_string(),
                            b"Target" => rel.target = value.to_string(),
                            b"TargetMode" => rel.external = value.eq_ignore_ascii_case("external"),
                            _ => {}
                        }
                    }
                    if !rel.id.is_empty() {
                        rels.push(rel);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Locate the main document part through the package relationships.
    ///
    /// Falls back to `word/document.xml` when no internal officeDocument
    /// relationship is declared.
    pub fn main_document_path(&self) -> Result<String> {
        let path = self
            .read_package_relationships()?
            .into_iter()
            .find(|rel| rel.rel_type.ends_with(OFFICE_DOCUMENT_REL) && !rel.external)
            .map(|rel| rel.target.trim_start_matches('/').to_string())
            .filter(|target| !target.is_empty())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string());
        Ok(path)
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

/// Prefix an I/O error message with the path it concerns.
fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}
