//! DOCX parser implementation.

use crate::container::OoxmlContainer;
use crate::detect::{detect_format, FormatType};
use crate::error::{Error, Result};
use crate::model::{Cell, Document, Paragraph, Row, Table, VerticalMerge};
use quick_xml::events::{BytesStart, Event};

/// Stack depth of direct children of `w:body` (`w:document`, `w:body`, child).
const BODY_CHILD_DEPTH: usize = 2;
/// Stack depth of a `w:tr` inside a top-level table.
const ROW_DEPTH: usize = 3;
/// Stack depth of a `w:tc` inside a top-level table row.
const CELL_DEPTH: usize = 4;

/// Parser for DOCX (Word) documents.
///
/// Loads the top-level paragraphs and tables of the main document part.
/// Headers, footers, notes and text boxes are not read.
pub struct DocxParser {
    container: OoxmlContainer,
    document_path: String,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    ///
    /// The file is read into memory and closed before this returns.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container, rejecting non-Word packages.
    fn from_container(container: OoxmlContainer) -> Result<Self> {
        let format = detect_format(&container)?;
        tracing::debug!(%format, "detected package format");
        if format != FormatType::Docx {
            return Err(Error::UnsupportedFormat(format.to_string()));
        }

        let document_path = container.main_document_path()?;
        if !container.exists(&document_path) {
            return Err(Error::MissingComponent(document_path));
        }
        Ok(Self {
            container,
            document_path,
        })
    }

    /// Parse the document and return a Document model.
    pub fn parse(&self) -> Result<Document> {
        let xml = self.container.read_xml(&self.document_path)?;
        let doc = parse_document_xml(&xml)?;
        tracing::debug!(
            part = %self.document_path,
            paragraphs = doc.paragraphs.len(),
            tables = doc.tables.len(),
            "parsed main document"
        );
        Ok(doc)
    }
}

/// Parse the XML of a main document part into a Document model.
///
/// Only direct children of `w:body` are top-level. Table rows, cells and
/// cell paragraphs must likewise be direct children of their parent, so
/// content wrapped in content controls and nested tables is skipped.
pub fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = quick_xml::Reader::from_str(xml);
    // Don't trim text - preserve whitespace from xml:space="preserve" elements
    reader.config_mut().trim_text(false);

    let mut builder = BodyBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => builder.open(e),
            Ok(Event::Empty(ref e)) => {
                builder.open(e);
                builder.close();
            }
            Ok(Event::End(_)) => builder.close(),
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                builder.text(&text);
            }
            Ok(Event::CData(ref e)) => {
                builder.text(&String::from_utf8_lossy(e));
            }
            Ok(Event::Eof) if !builder.stack.is_empty() => {
                return Err(Error::XmlParse("unexpected end of document".to_string()));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(builder.document)
}

/// WordprocessingML elements the parser tracks, by local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Document,
    Body,
    Paragraph,
    Hyperlink,
    Run,
    Text,
    Table,
    Row,
    RowProperties,
    Cell,
    CellProperties,
    Other,
}

impl Tag {
    fn from_local_name(name: &[u8]) -> Self {
        match name {
            b"document" => Tag::Document,
            b"body" => Tag::Body,
            b"p" => Tag::Paragraph,
            b"hyperlink" => Tag::Hyperlink,
            b"r" => Tag::Run,
            b"t" => Tag::Text,
            b"tbl" => Tag::Table,
            b"tr" => Tag::Row,
            b"trPr" => Tag::RowProperties,
            b"tc" => Tag::Cell,
            b"tcPr" => Tag::CellProperties,
            _ => Tag::Other,
        }
    }
}

/// A paragraph being collected, with the stack depth of its `w:p`.
#[derive(Debug)]
struct OpenParagraph {
    depth: usize,
    text: String,
}

/// Streaming builder fed by XML events.
#[derive(Debug, Default)]
struct BodyBuilder {
    stack: Vec<Tag>,
    document: Document,
    paragraph: Option<OpenParagraph>,
    table: Option<Table>,
    row: Option<Row>,
    cell: Option<Cell>,
}

impl BodyBuilder {
    fn open(&mut self, e: &BytesStart) {
        let local = e.local_name();
        let name = local.as_ref();
        let tag = Tag::from_local_name(name);

        match (tag, self.stack.as_slice()) {
            (Tag::Paragraph, [Tag::Document, Tag::Body])
            | (Tag::Paragraph, [Tag::Document, Tag::Body, Tag::Table, Tag::Row, Tag::Cell])
                if self.paragraph.is_none() =>
            {
                self.paragraph = Some(OpenParagraph {
                    depth: self.stack.len(),
                    text: String::new(),
                });
            }
            (Tag::Table, [Tag::Document, Tag::Body]) => self.table = Some(Table::new()),
            (Tag::Row, [Tag::Document, Tag::Body, Tag::Table]) if self.table.is_some() => {
                self.row = Some(Row::new());
            }
            (Tag::Cell, [Tag::Document, Tag::Body, Tag::Table, Tag::Row]) if self.row.is_some() => {
                self.cell = Some(Cell::new());
            }
            (Tag::Other, [Tag::Document, Tag::Body, Tag::Table, Tag::Row, Tag::RowProperties])
                if name == b"gridBefore" =>
            {
                if let (Some(row), Some(n)) = (self.row.as_mut(), int_attr(e, b"val")) {
                    row.grid_before = n;
                }
            }
            (
                Tag::Other,
                [Tag::Document, Tag::Body, Tag::Table, Tag::Row, Tag::Cell, Tag::CellProperties],
            ) => {
                if let Some(cell) = self.cell.as_mut() {
                    match name {
                        b"gridSpan" => cell.grid_span = int_attr(e, b"val").unwrap_or(1),
                        b"vMerge" => cell.v_merge = Some(vertical_merge(e)),
                        _ => {}
                    }
                }
            }
            (Tag::Other, _) if self.in_run() => {
                if let Some(s) = run_content_text(name, e) {
                    if let Some(para) = self.paragraph.as_mut() {
                        para.text.push_str(s);
                    }
                }
            }
            _ => {}
        }

        self.stack.push(tag);
    }

    fn close(&mut self) {
        let Some(tag) = self.stack.pop() else {
            return;
        };
        let depth = self.stack.len();

        match tag {
            Tag::Paragraph if self.paragraph.as_ref().is_some_and(|p| p.depth == depth) => {
                if let Some(open) = self.paragraph.take() {
                    let para = Paragraph::with_text(open.text);
                    if depth == BODY_CHILD_DEPTH {
                        self.document.add_paragraph(para);
                    } else if let Some(cell) = self.cell.as_mut() {
                        cell.paragraphs.push(para);
                    }
                }
            }
            Tag::Cell if depth == CELL_DEPTH => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.add_cell(cell);
                }
            }
            Tag::Row if depth == ROW_DEPTH => {
                if let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) {
                    table.add_row(row);
                }
            }
            Tag::Table if depth == BODY_CHILD_DEPTH => {
                if let Some(table) = self.table.take() {
                    self.document.add_table(table);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        let Some(para) = self.paragraph.as_mut() else {
            return;
        };
        let inner = &self.stack[para.depth + 1..];
        if matches!(
            inner,
            [Tag::Run, Tag::Text] | [Tag::Hyperlink, Tag::Run, Tag::Text]
        ) {
            para.text.push_str(text);
        }
    }

    /// Whether the innermost open element is a run of the open paragraph,
    /// directly or through a hyperlink.
    fn in_run(&self) -> bool {
        match &self.paragraph {
            Some(para) => matches!(
                &self.stack[para.depth + 1..],
                [Tag::Run] | [Tag::Hyperlink, Tag::Run]
            ),
            None => false,
        }
    }
}

/// Text produced by a non-`w:t` child of a run.
///
/// Page and column breaks yield nothing; only text-wrapping breaks are
/// line breaks.
fn run_content_text(name: &[u8], e: &BytesStart) -> Option<&'static str> {
    match name {
        b"tab" | b"ptab" => Some("\t"),
        b"cr" => Some("\n"),
        b"br" => match attr(e, b"type").as_deref() {
            None | Some("textWrapping") => Some("\n"),
            Some(_) => None,
        },
        b"noBreakHyphen" => Some("-"),
        _ => None,
    }
}

/// Read `w:vMerge`: `restart` starts a range, anything else continues one.
fn vertical_merge(e: &BytesStart) -> VerticalMerge {
    match attr(e, b"val").as_deref() {
        Some("restart") => VerticalMerge::Restart,
        _ => VerticalMerge::Continue,
    }
}

/// Look up an attribute by local name.
fn attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

fn int_attr(e: &BytesStart, key: &[u8]) -> Option<u32> {
    attr(e, key).and_then(|v| v.trim().parse().ok())
}
