//! Text styles and the per-role stylesheet.
//!
//! Every block type picks its style from a [`StyleSheet`] instead of
//! hard-coding font changes, so emphasized vs. normal rendering is plain
//! configuration.

mod font;

pub use font::FontFace;

use serde::{Deserialize, Serialize};

/// Points per millimetre. Layout happens in millimetres, PDF space is in points.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Horizontal inset of text from the edges of its cell.
pub const CELL_PADDING: f32 = 1.0;

/// Horizontal alignment of text inside a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned (default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// Font face and size for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font face
    pub face: FontFace,
    /// Font size in points
    pub size: f32,
}

impl TextStyle {
    /// Create a style.
    pub fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    /// Regular weight at the given size.
    pub fn regular(size: f32) -> Self {
        Self::new(FontFace::Regular, size)
    }

    /// Bold weight at the given size.
    pub fn bold(size: f32) -> Self {
        Self::new(FontFace::Bold, size)
    }

    /// Italic at the given size.
    pub fn italic(size: f32) -> Self {
        Self::new(FontFace::Italic, size)
    }

    /// Font size in layout units (millimetres).
    pub fn size_mm(&self) -> f32 {
        self.size / PT_PER_MM
    }

    /// Width of `text` in layout units (millimetres).
    pub fn text_width(&self, text: &str) -> f32 {
        self.face.string_width_pt(text, self.size) / PT_PER_MM
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(12.0)
    }
}

/// Styles selected per rendering role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Page header title
    pub header: TextStyle,
    /// Page footer
    pub footer: TextStyle,
    /// Section titles
    pub section: TextStyle,
    /// Metric lines
    pub metric: TextStyle,
    /// Wrapped paragraphs
    pub paragraph: TextStyle,
    /// Table header row
    pub table_header: TextStyle,
    /// Table body rows
    pub table_body: TextStyle,
}

impl StyleSheet {
    /// Create the default stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header style.
    pub fn with_header(mut self, style: TextStyle) -> Self {
        self.header = style;
        self
    }

    /// Set the footer style.
    pub fn with_footer(mut self, style: TextStyle) -> Self {
        self.footer = style;
        self
    }

    /// Set the section title style.
    pub fn with_section(mut self, style: TextStyle) -> Self {
        self.section = style;
        self
    }

    /// Set the metric line style.
    pub fn with_metric(mut self, style: TextStyle) -> Self {
        self.metric = style;
        self
    }

    /// Set the paragraph style.
    pub fn with_paragraph(mut self, style: TextStyle) -> Self {
        self.paragraph = style;
        self
    }

    /// Set both table styles.
    pub fn with_table(mut self, header: TextStyle, body: TextStyle) -> Self {
        self.table_header = header;
        self.table_body = body;
        self
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            header: TextStyle::bold(14.0),
            footer: TextStyle::italic(8.0),
            section: TextStyle::bold(12.0),
            metric: TextStyle::regular(12.0),
            paragraph: TextStyle::regular(12.0),
            table_header: TextStyle::bold(12.0),
            table_body: TextStyle::regular(12.0),
        }
    }
}
