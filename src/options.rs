//! Report layout options and configuration.
//!
//! All lengths are in millimetres, the layout unit of the builder.

use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::style::StyleSheet;
use serde::{Deserialize, Serialize};

/// Title drawn by the default page header unless another one is set.
pub const DEFAULT_TITLE: &str = "Supply Chain Optimization Dashboard Report";

/// Page dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    /// ISO A4, 210 x 297 mm
    #[default]
    A4,
    /// US Letter, 8.5 x 11 inches
    Letter,
    /// Arbitrary width and height in millimetres
    Custom {
        /// Page width
        width: f32,
        /// Page height
        height: f32,
    },
}

impl PageSize {
    /// Page dimensions as (width, height).
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    /// Parse a page size name ("a4", "letter").
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            other => Err(format!("Unknown page size: {}", other)),
        }
    }
}

/// Page margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Left margin
    pub left: f32,
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
}

impl Margins {
    /// Same margin on every side.
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::all(10.0)
    }
}

/// Options controlling report layout and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Page dimensions
    pub page_size: PageSize,

    /// Page margins
    pub margins: Margins,

    /// Height of every rendered line (sections, metrics, table rows)
    pub line_height: f32,

    /// Extra gap after a section title
    pub section_gap: f32,

    /// Gap between the header title and the first content line
    pub header_gap: f32,

    /// Space at the bottom of each page that content may not enter
    pub footer_reserved: f32,

    /// Distance of the footer line from the bottom edge
    pub footer_offset: f32,

    /// Stroke width for table borders
    pub border_width: f32,

    /// Per-role text styles
    pub styles: StyleSheet,

    /// Title drawn by the default page header (none = no header line)
    pub title: Option<String>,

    /// Document metadata written to the Info dictionary
    pub metadata: Metadata,

    /// Flate-compress page content streams
    pub compress: bool,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the gap after section titles.
    pub fn with_section_gap(mut self, gap: f32) -> Self {
        self.section_gap = gap;
        self
    }

    /// Set the reserved footer height.
    pub fn with_footer_reserved(mut self, height: f32) -> Self {
        self.footer_reserved = height;
        self
    }

    /// Set the stylesheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Set the header title; also used as the document title when none is set.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if self.metadata.title.is_none() {
            self.metadata.title = Some(title.clone());
        }
        self.title = Some(title);
        self
    }

    /// Drop the header title; the default header then draws nothing and
    /// content starts at the top margin.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Set document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Page width.
    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions().0
    }

    /// Page height.
    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions().1
    }

    /// Width available for content between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width() - self.margins.left - self.margins.right
    }

    /// Lowest y coordinate content may reach.
    pub fn content_bottom(&self) -> f32 {
        self.page_height() - self.footer_reserved
    }

    /// Check that the geometry leaves room for at least one line of content
    /// below a header.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.page_size.dimensions();
        let lengths = [
            ("page width", width),
            ("page height", height),
            ("line height", self.line_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidLayout(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let gaps = [
            ("left margin", self.margins.left),
            ("top margin", self.margins.top),
            ("right margin", self.margins.right),
            ("section gap", self.section_gap),
            ("header gap", self.header_gap),
            ("footer reserved height", self.footer_reserved),
            ("footer offset", self.footer_offset),
            ("border width", self.border_width),
        ];
        for (name, value) in gaps {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidLayout(format!(
                    "{} must be a finite, non-negative length, got {}",
                    name, value
                )));
            }
        }

        if self.content_width() <= 0.0 {
            return Err(Error::InvalidLayout(format!(
                "margins leave no horizontal space on a {}mm wide page",
                width
            )));
        }

        let first_line = self.margins.top + self.line_height + self.header_gap;
        if first_line + self.line_height > self.content_bottom() {
            return Err(Error::InvalidLayout(format!(
                "page height {} cannot hold a line below the header (content ends at {})",
                height,
                self.content_bottom()
            )));
        }

        Ok(())
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins::default(),
            line_height: 10.0,
            section_gap: 5.0,
            header_gap: 10.0,
            footer_reserved: 20.0,
            footer_offset: 15.0,
            border_width: 0.2,
            styles: StyleSheet::default(),
            title: Some(DEFAULT_TITLE.to_string()),
            metadata: Metadata::default(),
            compress: true,
        }
    }
}
