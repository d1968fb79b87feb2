//! Plain text dump of the page layout.

use crate::model::Document;

/// Line placed between pages.
pub const PAGE_SEPARATOR: &str = "\u{000C}";

/// Text of each page in drawing order, one line per cell or table row.
/// Table cells are separated by tabs.
pub fn to_text(doc: &Document) -> String {
    doc.pages
        .iter()
        .map(|page| page.plain_text())
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", PAGE_SEPARATOR))
}
