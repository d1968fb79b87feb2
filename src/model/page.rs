//! Page-level types.

use crate::style::{Alignment, TextStyle};
use serde::{Deserialize, Serialize};

/// A single laid-out page.
///
/// Coordinates are millimetres from the top-left corner of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Vertical offset where content starts, just below the header
    pub content_top: f32,

    /// Current vertical write position
    cursor: f32,

    /// Rendered elements in drawing order
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            content_top: 0.0,
            cursor: 0.0,
            elements: Vec::new(),
        }
    }

    /// Current vertical write position.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Move the cursor down. Negative or non-finite amounts are ignored so the
    /// cursor never moves up within a page.
    pub fn advance(&mut self, dy: f32) {
        if dy.is_finite() && dy > 0.0 {
            self.cursor += dy;
        }
    }

    /// Fix the top of the content area and place the cursor there.
    pub(crate) fn start_content_at(&mut self, y: f32) {
        self.content_top = y;
        self.cursor = y;
    }

    /// Remaining height between the cursor and `bottom`.
    pub fn remaining(&self, bottom: f32) -> f32 {
        bottom - self.cursor
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Whether anything besides header and footer decoration was drawn.
    pub fn has_content(&self) -> bool {
        self.elements.iter().any(|e| match e {
            Element::Text(cell) => !cell.role.is_decoration(),
            Element::TableRow(_) => true,
        })
    }

    /// Text cells in drawing order (table cells excluded).
    pub fn text_cells(&self) -> impl Iterator<Item = &TextCell> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(cell) => Some(cell),
            Element::TableRow(_) => None,
        })
    }

    /// Bordered table rows on this page.
    pub fn table_rows(&self) -> impl Iterator<Item = &TableRowCells> {
        self.elements.iter().filter_map(|e| match e {
            Element::TableRow(row) => Some(row),
            Element::Text(_) => None,
        })
    }

    /// Text of the footer cells, joined by spaces.
    pub fn footer_text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .text_cells()
            .filter(|c| c.role == CellRole::Footer)
            .map(|c| c.text.as_str())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Plain text of the page, one line per text cell or table row.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|e| match e {
                Element::Text(cell) => cell.text.clone(),
                Element::TableRow(row) => row.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get the number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

/// A rendered element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A single text cell
    Text(TextCell),
    /// One bordered table row
    TableRow(TableRowCells),
}

/// What a rendered cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRole {
    /// Page header
    Header,
    /// Page footer
    Footer,
    /// Section title
    Section,
    /// Metric line
    Metric,
    /// Paragraph line
    Paragraph,
    /// Table header cell
    TableHeader,
    /// Table body cell
    TableBody,
}

impl CellRole {
    /// Header and footer cells are page decoration, not content.
    pub fn is_decoration(self) -> bool {
        matches!(self, CellRole::Header | CellRole::Footer)
    }
}

/// A positioned text cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCell {
    /// What the cell belongs to
    pub role: CellRole,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Cell width
    pub width: f32,
    /// Cell height
    pub height: f32,
    /// Text content
    pub text: String,
    /// Font and size
    pub style: TextStyle,
    /// Horizontal alignment within the cell
    pub align: Alignment,
    /// Whether a border rectangle is stroked around the cell
    pub border: bool,
}

/// The cells of one bordered table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowCells {
    /// Whether this is the table header row
    pub header: bool,
    /// Top edge
    pub y: f32,
    /// Row height
    pub height: f32,
    /// Cells left to right
    pub cells: Vec<TextCell>,
}

impl TableRowCells {
    /// Cell values joined by tabs.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(role: CellRole, text: &str) -> TextCell {
        TextCell {
            role,
            x: 10.0,
            y: 10.0,
            width: 0.0,
            height: 10.0,
            text: text.to_string(),
            style: TextStyle::default(),
            align: Alignment::Left,
            border: false,
        }
    }

    #[test]
    fn test_page_new() {
        let page = Page::new(1, 210.0, 297.0);
        assert_eq!(page.number, 1);
        assert_eq!(page.cursor(), 0.0);
        assert!(!page.has_content());
    }

    #[test]
    fn test_cursor_never_moves_up() {
        let mut page = Page::new(1, 210.0, 297.0);
        page.start_content_at(30.0);
        page.advance(10.0);
        page.advance(-25.0);
        page.advance(f32::NAN);
        assert_eq!(page.cursor(), 40.0);
        assert_eq!(page.remaining(277.0), 237.0);
    }

    #[test]
    fn test_decoration_is_not_content() {
        let mut page = Page::new(2, 210.0, 297.0);
        page.push(Element::Text(cell(CellRole::Header, "Title")));
        page.push(Element::Text(cell(CellRole::Footer, "Page 2")));
        assert!(!page.has_content());
        assert_eq!(page.footer_text().as_deref(), Some("Page 2"));

        page.push(Element::Text(cell(CellRole::Metric, "a: b")));
        assert!(page.has_content());
    }

    #[test]
    fn test_plain_text_includes_rows() {
        let mut page = Page::new(1, 210.0, 297.0);
        page.push(Element::TableRow(TableRowCells {
            header: true,
            y: 30.0,
            height: 10.0,
            cells: vec![cell(CellRole::TableHeader, "A"), cell(CellRole::TableHeader, "B")],
        }));
        assert_eq!(page.plain_text(), "A\tB");
        assert_eq!(page.table_rows().count(), 1);
    }
}
