//! Serializes a laid-out [`Document`] into PDF bytes.

use super::encoding::encode_win_ansi;
use crate::error::Result;
use crate::model::{Document, Element, Metadata, Page, TextCell};
use crate::options::ReportOptions;
use crate::style::{Alignment, FontFace, CELL_PADDING, PT_PER_MM};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, Stream, StringFormat};
use std::io::Write;

/// PDF version written in the file header.
pub const PDF_VERSION: &str = "1.5";

/// Fraction of the font size the baseline sits below the cell's vertical centre.
const BASELINE_SHIFT: f32 = 0.3;

/// Write `doc` as a complete PDF file.
///
/// The output is deterministic: identical documents and options produce
/// identical bytes.
pub fn write_document(doc: &Document, options: &ReportOptions) -> Result<Vec<u8>> {
    let mut pdf = lopdf::Document::with_version(PDF_VERSION);
    let pages_id = pdf.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = pdf.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids = Vec::with_capacity(doc.pages.len());
    let mut replaced = 0;
    for page in &doc.pages {
        let (operations, page_replaced) = page_operations(page, options);
        replaced += page_replaced;

        let data = Content { operations }.encode()?;
        let stream = if options.compress {
            Stream::new(dictionary! { "Filter" => "FlateDecode" }, deflate(&data)?)
        } else {
            Stream::new(Dictionary::new(), data)
        };
        let content_id = pdf.add_object(stream);

        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(round(page.width * PT_PER_MM)),
                Object::Real(round(page.height * PT_PER_MM)),
            ],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    if replaced > 0 {
        log::warn!(
            "{} characters could not be encoded in WinAnsi and were replaced",
            replaced
        );
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = pdf.add_object(info_dictionary(&doc.metadata));
    pdf.trailer.set("Root", catalog_id);
    pdf.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

fn info_dictionary(metadata: &Metadata) -> Dictionary {
    let mut info = Dictionary::new();
    info.set(
        "Producer",
        text_object(&format!("supplyreport {}", env!("CARGO_PKG_VERSION"))),
    );

    let fields = [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
        ("Keywords", &metadata.keywords),
        ("Creator", &metadata.creator),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            info.set(key, text_object(value));
        }
    }
    if let Some(created) = &metadata.created {
        info.set("CreationDate", text_object(&Metadata::pdf_date(created)));
    }
    info
}

/// Content stream operations for one page, plus the count of replaced
/// characters.
fn page_operations(page: &Page, options: &ReportOptions) -> (Vec<Operation>, usize) {
    let mut ops = vec![Operation::new(
        "w",
        vec![Object::Real(round(options.border_width * PT_PER_MM))],
    )];
    let mut replaced = 0;

    for element in &page.elements {
        match element {
            Element::Text(cell) => {
                replaced += cell_operations(&mut ops, page, cell, false);
            }
            Element::TableRow(row) => {
                for cell in &row.cells {
                    replaced += cell_operations(&mut ops, page, cell, true);
                }
            }
        }
    }

    (ops, replaced)
}

/// Emit border and text for one cell. Clipped cells cannot draw outside
/// their rectangle.
fn cell_operations(ops: &mut Vec<Operation>, page: &Page, cell: &TextCell, clip: bool) -> usize {
    let rect = || {
        vec![
            Object::Real(round(cell.x * PT_PER_MM)),
            Object::Real(round((page.height - cell.y - cell.height) * PT_PER_MM)),
            Object::Real(round(cell.width * PT_PER_MM)),
            Object::Real(round(cell.height * PT_PER_MM)),
        ]
    };

    if cell.border {
        ops.push(Operation::new("re", rect()));
        ops.push(Operation::new("S", vec![]));
    }

    if cell.text.is_empty() {
        return 0;
    }

    let text_width = cell.style.text_width(&cell.text);
    let text_x = match cell.align {
        Alignment::Left => cell.x + CELL_PADDING,
        Alignment::Center => cell.x + (cell.width - text_width) / 2.0,
        Alignment::Right => cell.x + cell.width - CELL_PADDING - text_width,
    };
    let baseline = cell.y + cell.height / 2.0 + BASELINE_SHIFT * cell.style.size_mm();
    let (bytes, replaced) = encode_win_ansi(&cell.text);

    if clip {
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("re", rect()));
        ops.push(Operation::new("W", vec![]));
        ops.push(Operation::new("n", vec![]));
    }
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![
            Object::Name(cell.style.face.resource_name().as_bytes().to_vec()),
            Object::Real(cell.style.size),
        ],
    ));
    ops.push(Operation::new(
        "Td",
        vec![
            Object::Real(round(text_x * PT_PER_MM)),
            Object::Real(round((page.height - baseline) * PT_PER_MM)),
        ],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(bytes, StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
    if clip {
        ops.push(Operation::new("Q", vec![]));
    }

    replaced
}

fn text_object(text: &str) -> Object {
    let (bytes, _) = encode_win_ansi(text);
    Object::String(bytes, StringFormat::Literal)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Round to hundredths of a point to keep content streams short.
fn round(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
