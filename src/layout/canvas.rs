//! Drawing surface handed to header and footer decorations.

use crate::model::{CellRole, Element, Page, TextCell};
use crate::options::ReportOptions;
use crate::style::{Alignment, StyleSheet, TextStyle};
use std::sync::Arc;

/// A page decoration: draws the header or footer of a page.
///
/// Decorations are plain callbacks supplied to the builder. They run once per
/// page: the header when the page is opened, the footer when it is closed.
pub type Decoration = Arc<dyn Fn(&mut PageCanvas<'_>) + Send + Sync>;

/// A line-oriented drawing surface over one page.
///
/// The canvas keeps its own vertical position. For headers, the position
/// where the callback leaves it becomes the top of the content area.
pub struct PageCanvas<'a> {
    page: &'a mut Page,
    options: &'a ReportOptions,
    role: CellRole,
    y: f32,
}

impl<'a> PageCanvas<'a> {
    pub(crate) fn new(
        page: &'a mut Page,
        options: &'a ReportOptions,
        role: CellRole,
        start_y: f32,
    ) -> Self {
        Self {
            page,
            options,
            role,
            y: start_y,
        }
    }

    /// 1-based number of the page being decorated.
    pub fn page_number(&self) -> u32 {
        self.page.number
    }

    /// Page width.
    pub fn page_width(&self) -> f32 {
        self.page.width
    }

    /// Page height.
    pub fn page_height(&self) -> f32 {
        self.page.height
    }

    /// Report options in effect.
    pub fn options(&self) -> &ReportOptions {
        self.options
    }

    /// Stylesheet in effect.
    pub fn styles(&self) -> &StyleSheet {
        &self.options.styles
    }

    /// Configured report title, if any.
    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    /// Current vertical position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move to an absolute vertical position. Negative values are measured
    /// from the bottom edge of the page.
    pub fn set_y(&mut self, y: f32) {
        self.y = if y < 0.0 { self.page.height + y } else { y };
    }

    /// Move down by `height`.
    pub fn ln(&mut self, height: f32) {
        if height.is_finite() && height > 0.0 {
            self.y += height;
        }
    }

    /// Draw a text cell at the left margin and move below it.
    ///
    /// A width of zero extends the cell to the right margin.
    pub fn cell(
        &mut self,
        width: f32,
        height: f32,
        text: impl Into<String>,
        style: TextStyle,
        align: Alignment,
    ) {
        let x = self.options.margins.left;
        let width = if width > 0.0 {
            width
        } else {
            self.page.width - self.options.margins.right - x
        };
        self.page.push(Element::Text(TextCell {
            role: self.role,
            x,
            y: self.y,
            width,
            height,
            text: text.into(),
            style,
            align,
            border: false,
        }));
        self.ln(height);
    }
}

/// Centered report title followed by the header gap. Draws nothing when no
/// title is configured.
pub fn default_header() -> Decoration {
    Arc::new(|canvas: &mut PageCanvas<'_>| {
        let Some(title) = canvas.title().map(str::to_string) else {
            return;
        };
        let style = canvas.styles().header;
        let line_height = canvas.options().line_height;
        let gap = canvas.options().header_gap;
        canvas.cell(0.0, line_height, title, style, Alignment::Center);
        canvas.ln(gap);
    })
}

/// Centered "Page N" line near the bottom edge.
pub fn default_footer() -> Decoration {
    Arc::new(|canvas: &mut PageCanvas<'_>| {
        let style = canvas.styles().footer;
        let offset = canvas.options().footer_offset;
        let line_height = canvas.options().line_height;
        let label = format!("Page {}", canvas.page_number());
        canvas.set_y(-offset);
        canvas.cell(0.0, line_height, label, style, Alignment::Center);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_draws_default_title() {
        let options = ReportOptions::new();
        let mut page = Page::new(1, 210.0, 297.0);
        let mut canvas = PageCanvas::new(&mut page, &options, CellRole::Header, 10.0);
        default_header()(&mut canvas);
        assert_eq!(canvas.y(), 30.0);
        assert_eq!(
            page.text_cells().next().map(|c| c.text.as_str()),
            Some(crate::options::DEFAULT_TITLE)
        );
    }

    #[test]
    fn test_default_header_with_title() {
        let options = ReportOptions::new().with_title("Dashboard");
        let mut page = Page::new(1, 210.0, 297.0);
        let mut canvas = PageCanvas::new(&mut page, &options, CellRole::Header, 10.0);
        default_header()(&mut canvas);
        assert_eq!(canvas.y(), 30.0);

        let cell = page.text_cells().next().unwrap();
        assert_eq!(cell.text, "Dashboard");
        assert_eq!(cell.width, 190.0);
        assert_eq!(cell.align, Alignment::Center);
        assert_eq!(cell.role, CellRole::Header);
    }

    #[test]
    fn test_default_header_without_title() {
        let options = ReportOptions::new().without_title();
        let mut page = Page::new(1, 210.0, 297.0);
        let mut canvas = PageCanvas::new(&mut page, &options, CellRole::Header, 10.0);
        default_header()(&mut canvas);
        assert_eq!(canvas.y(), 10.0);
        assert_eq!(page.element_count(), 0);
    }

    #[test]
    fn test_default_footer_position() {
        let options = ReportOptions::new();
        let mut page = Page::new(4, 210.0, 297.0);
        let mut canvas = PageCanvas::new(&mut page, &options, CellRole::Footer, 0.0);
        default_footer()(&mut canvas);

        let cell = page.text_cells().next().unwrap();
        assert_eq!(cell.text, "Page 4");
        assert_eq!(cell.y, 282.0);
        assert_eq!(cell.role, CellRole::Footer);
    }
}
