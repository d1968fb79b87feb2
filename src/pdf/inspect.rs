//! Reading rendered reports back.
//!
//! Provides a trait-based view of a PDF file so the checks in tests and the
//! CLI `inspect` command do not depend on lopdf types directly.

use std::collections::BTreeMap;

use super::encoding::decode_win_ansi;
use crate::error::{Error, Result};
use crate::style::FontFace;
use lopdf::{Document as LopdfDocument, Object};
use serde::Serialize;

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.5"

/// A value from a PDF content stream operand.
#[derive(Debug, Clone)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Other,
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

/// Abstract interface for reading a rendered report.
pub trait PdfBackend {
    /// Return all pages as (page_number → PageId).
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Return the (decompressed) content stream bytes for a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>>;

    /// Parse content stream bytes into a sequence of operations.
    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>>;

    /// PDF version string from the file header.
    fn version(&self) -> String;
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc })
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;
        let contents = page_dict.get(b"Contents")?;

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r)? {
                Object::Stream(s) => Ok(s
                    .decompressed_content()
                    .unwrap_or_else(|_| s.content.clone())),
                _ => Err(Error::Pdf("Invalid content stream".to_string())),
            },
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            let data = s
                                .decompressed_content()
                                .unwrap_or_else(|_| s.content.clone());
                            content.extend_from_slice(&data);
                            content.push(b' ');
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::Pdf("Invalid content stream".to_string())),
        }
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        let content = lopdf::content::Content::decode(data)?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        _ => PdfValue::Other,
    }
}

/// A text run drawn with `Tj`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Decoded text
    pub text: String,
    /// Font face selected when the run was drawn, if it is one of ours
    pub face: Option<FontFace>,
}

/// What one page of a rendered report contains.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InspectedPage {
    /// Page number (1-indexed)
    pub number: u32,
    /// Text runs in drawing order
    pub texts: Vec<TextRun>,
    /// Stroked rectangles (cell borders)
    pub bordered_cells: usize,
}

impl InspectedPage {
    /// Whether a text run equals `text` exactly.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}

/// Summary of a rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct InspectedDocument {
    /// PDF version from the header
    pub version: String,
    /// Pages in order
    pub pages: Vec<InspectedPage>,
}

impl InspectedDocument {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs across pages.
    pub fn all_texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| p.texts.iter().map(|t| t.text.as_str()))
    }
}

/// Read the PDF version from the file signature.
///
/// Fails with [`Error::UnknownFormat`] when the data does not start with
/// `%PDF-`.
pub fn detect_version(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();
    let chars: Vec<char> = version.chars().collect();
    let valid = chars.len() == 3
        && chars[0].is_ascii_digit()
        && chars[1] == '.'
        && chars[2].is_ascii_digit();
    if !valid {
        return Err(Error::UnsupportedVersion(version));
    }
    Ok(version)
}

/// Load a rendered report and summarize every page.
pub fn inspect(data: &[u8]) -> Result<InspectedDocument> {
    detect_version(data)?;
    let backend = LopdfBackend::load_bytes(data)?;
    inspect_backend(&backend)
}

/// Summarize every page of an already loaded document.
pub fn inspect_backend<B: PdfBackend>(backend: &B) -> Result<InspectedDocument> {
    let mut pages = Vec::new();

    for (number, page_id) in backend.pages() {
        let content = backend.page_content(page_id)?;
        let ops = backend.decode_content(&content)?;
        pages.push(summarize_page(number, &ops));
    }

    Ok(InspectedDocument {
        version: backend.version(),
        pages,
    })
}

fn summarize_page(number: u32, ops: &[ContentOp]) -> InspectedPage {
    let mut page = InspectedPage {
        number,
        ..Default::default()
    };
    let mut face = None;
    let mut pending_rect = false;

    for op in ops {
        match op.operator.as_str() {
            "Tf" => {
                face = op.operands.first().and_then(|v| match v {
                    PdfValue::Name(n) => FontFace::from_resource_name(&String::from_utf8_lossy(n)),
                    _ => None,
                });
            }
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    page.texts.push(TextRun {
                        text: decode_win_ansi(bytes),
                        face,
                    });
                }
            }
            "re" => pending_rect = true,
            "S" if pending_rect => {
                page.bordered_cells += 1;
                pending_rect = false;
            }
            "W" | "n" => pending_rect = false,
            _ => {}
        }
    }

    page
}
