//! The paginating report builder.

use super::canvas::{default_footer, default_header, Decoration, PageCanvas};
use super::wrap::wrap_text;
use crate::error::{Error, Result};
use crate::model::{
    metric_line, CellRole, ContentBlock, Document, Element, Page, TableBlock, TableRowCells,
    TextCell,
};
use crate::options::ReportOptions;
use crate::pdf;
use crate::style::{Alignment, TextStyle, CELL_PADDING};
use std::fmt;
use std::sync::Arc;

/// Builder lifecycle.
enum BuildState {
    /// Accepting content
    Open,
    /// `output()` has run; holds the serialized bytes
    Finalized(Vec<u8>),
}

/// Lays out content blocks onto pages and finalizes them into a PDF.
///
/// # Example
///
/// ```
/// use supplyreport::ReportBuilder;
///
/// let mut report = ReportBuilder::new();
/// report.add_page()?;
/// report.add_section("Key Metrics")?;
/// report.add_metric("Inventory Turnover", "5.21", Some("(-6.7%)"))?;
/// let bytes = report.output()?;
/// assert!(bytes.starts_with(b"%PDF-"));
/// # Ok::<(), supplyreport::Error>(())
/// ```
pub struct ReportBuilder {
    options: ReportOptions,
    header: Decoration,
    footer: Decoration,
    document: Document,
    footer_pending: bool,
    state: BuildState,
}

impl ReportBuilder {
    /// Create a builder with default options. No page exists until content is
    /// added or [`add_page`](Self::add_page) is called.
    pub fn new() -> Self {
        Self::from_valid_options(ReportOptions::default())
    }

    /// Create a builder with custom options.
    pub fn with_options(options: ReportOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: ReportOptions) -> Self {
        let mut metadata = options.metadata.clone();
        if metadata.title.is_none() {
            metadata.title = options.title.clone();
        }
        let document = Document::new(metadata);
        Self {
            options,
            header: default_header(),
            footer: default_footer(),
            document,
            footer_pending: false,
            state: BuildState::Open,
        }
    }

    /// Replace the page header decoration.
    pub fn with_header<F>(mut self, header: F) -> Self
    where
        F: Fn(&mut PageCanvas<'_>) + Send + Sync + 'static,
    {
        self.header = Arc::new(header);
        self
    }

    /// Replace the page footer decoration.
    pub fn with_footer<F>(mut self, footer: F) -> Self
    where
        F: Fn(&mut PageCanvas<'_>) + Send + Sync + 'static,
    {
        self.footer = Arc::new(footer);
        self
    }

    /// Options in effect.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// The laid-out document so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of pages so far.
    pub fn page_count(&self) -> u32 {
        self.document.page_count()
    }

    /// Whether [`output`](Self::output) has completed.
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, BuildState::Finalized(_))
    }

    /// Start a new page and draw its header.
    pub fn add_page(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.open_page();
        Ok(())
    }

    /// Add an emphasized section title.
    pub fn add_section(&mut self, title: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        let line_height = self.options.line_height;
        let style = self.options.styles.section;
        self.prepare(line_height + self.options.section_gap);
        self.text_line(CellRole::Section, title.into(), style);
        self.advance(line_height + self.options.section_gap);
        Ok(())
    }

    /// Add a `label: value trend` line.
    pub fn add_metric(&mut self, label: &str, value: &str, trend: Option<&str>) -> Result<()> {
        self.ensure_open()?;
        let line_height = self.options.line_height;
        let style = self.options.styles.metric;
        self.prepare(line_height);
        self.text_line(CellRole::Metric, metric_line(label, value, trend), style);
        self.advance(line_height);
        Ok(())
    }

    /// Add a bordered table.
    ///
    /// The shape is checked before anything is drawn. Rows may continue on a
    /// following page; the header row is drawn once, at the start.
    pub fn add_table<R, C, H>(&mut self, rows: &[R], column_widths: &[f32], headers: &[H]) -> Result<()>
    where
        R: AsRef<[C]>,
        C: ToString,
        H: AsRef<str>,
    {
        self.ensure_open()?;
        let table = TableBlock::new(rows, column_widths, headers)?;
        self.render_table(&table);
        Ok(())
    }

    /// Add word-wrapped text spanning the content width.
    pub fn add_paragraph(&mut self, text: &str) -> Result<()> {
        self.ensure_open()?;
        let style = self.options.styles.paragraph;
        let line_height = self.options.line_height;
        let max_width = self.options.content_width() - 2.0 * CELL_PADDING;
        for line in wrap_text(text, &style, max_width) {
            self.prepare(line_height);
            self.text_line(CellRole::Paragraph, line, style);
            self.advance(line_height);
        }
        Ok(())
    }

    /// Move the cursor down. Never breaks the page by itself; the next block
    /// that does not fit will.
    pub fn add_spacing(&mut self, height: f32) -> Result<()> {
        self.ensure_open()?;
        if self.document.is_empty() {
            self.open_page();
        }
        self.advance(height);
        Ok(())
    }

    /// Add a pre-built block.
    pub fn add_block(&mut self, block: &ContentBlock) -> Result<()> {
        match block {
            ContentBlock::Section { title } => self.add_section(title.as_str()),
            ContentBlock::Metric {
                label,
                value,
                trend,
            } => self.add_metric(label, value, trend.as_deref()),
            ContentBlock::Table(table) => {
                self.ensure_open()?;
                self.render_table(table);
                Ok(())
            }
            ContentBlock::Paragraph { text } => self.add_paragraph(text),
            ContentBlock::Spacing { height } => self.add_spacing(*height),
        }
    }

    /// Serialize the document to PDF bytes.
    ///
    /// The first successful call draws the last footer and finalizes the
    /// builder; later calls return the same bytes.
    pub fn output(&mut self) -> Result<Vec<u8>> {
        if let BuildState::Finalized(bytes) = &self.state {
            return Ok(bytes.clone());
        }
        if self.document.is_empty() {
            return Err(Error::EmptyDocument);
        }

        self.close_page();
        let bytes = pdf::write_document(&self.document, &self.options)?;
        log::info!(
            "Finalized report: {} pages, {} bytes",
            self.document.page_count(),
            bytes.len()
        );
        self.state = BuildState::Finalized(bytes.clone());
        Ok(bytes)
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            BuildState::Open => Ok(()),
            BuildState::Finalized(_) => Err(Error::DocumentFinalized),
        }
    }

    /// Make sure a page exists with room for `height`, breaking if needed.
    ///
    /// A page holding only its header, with the cursor still at the top of
    /// the content area, is never broken again: a block taller than the
    /// whole content area is drawn there rather than looping. Spacing counts
    /// as content.
    fn prepare(&mut self, height: f32) {
        let bottom = self.options.content_bottom();
        let needs_page = match self.document.pages.last() {
            None => true,
            Some(page) => {
                let used = page.has_content() || page.cursor() > page.content_top;
                page.cursor() + height > bottom && used
            }
        };
        if needs_page {
            if let Some(page) = self.document.pages.last() {
                log::debug!(
                    "Page break after page {} (cursor {:.1} + {:.1} > {:.1})",
                    page.number,
                    page.cursor(),
                    height,
                    bottom
                );
            }
            self.open_page();
        }
    }

    fn open_page(&mut self) {
        self.close_page();

        let number = self.document.page_count() + 1;
        let (width, height) = self.options.page_size.dimensions();
        let mut page = Page::new(number, width, height);

        let top = self.options.margins.top;
        let mut canvas = PageCanvas::new(&mut page, &self.options, CellRole::Header, top);
        (self.header)(&mut canvas);
        let content_top = canvas.y().max(top);

        page.start_content_at(content_top);
        self.document.add_page(page);
        self.footer_pending = true;
    }

    fn close_page(&mut self) {
        if !self.footer_pending {
            return;
        }
        if let Some(page) = self.document.pages.last_mut() {
            let start = page.height - self.options.footer_offset;
            let mut canvas = PageCanvas::new(page, &self.options, CellRole::Footer, start);
            (self.footer)(&mut canvas);
        }
        self.footer_pending = false;
    }

    fn advance(&mut self, height: f32) {
        if let Some(page) = self.document.last_page_mut() {
            page.advance(height);
        }
    }

    /// Draw a full-width, left-aligned line at the cursor.
    fn text_line(&mut self, role: CellRole, text: String, style: TextStyle) {
        let x = self.options.margins.left;
        let width = self.options.content_width();
        let height = self.options.line_height;
        if let Some(page) = self.document.pages.last_mut() {
            let y = page.cursor();
            page.push(Element::Text(TextCell {
                role,
                x,
                y,
                width,
                height,
                text,
                style,
                align: Alignment::Left,
                border: false,
            }));
        }
    }

    fn render_table(&mut self, table: &TableBlock) {
        let line_height = self.options.line_height;
        let start_page = self.document.page_count();

        self.prepare(line_height);
        self.table_row(table, table.headers(), true);
        self.advance(line_height);

        for row in table.rows() {
            self.prepare(line_height);
            self.table_row(table, row, false);
            self.advance(line_height);
        }

        let end_page = self.document.page_count();
        if end_page > start_page.max(1) {
            log::debug!(
                "Table of {} rows continued across pages {}..={}",
                table.rendered_row_count(),
                start_page.max(1),
                end_page
            );
        }
    }

    fn table_row(&mut self, table: &TableBlock, values: &[String], header: bool) {
        let (role, style) = if header {
            (CellRole::TableHeader, self.options.styles.table_header)
        } else {
            (CellRole::TableBody, self.options.styles.table_body)
        };
        let height = self.options.line_height;
        let mut x = self.options.margins.left;

        let Some(page) = self.document.pages.last_mut() else {
            return;
        };
        let y = page.cursor();
        let cells = values
            .iter()
            .zip(table.column_widths())
            .map(|(value, &width)| {
                let cell = TextCell {
                    role,
                    x,
                    y,
                    width,
                    height,
                    text: value.clone(),
                    style,
                    align: Alignment::Center,
                    border: true,
                };
                x += width;
                cell
            })
            .collect();

        page.push(Element::TableRow(TableRowCells {
            header,
            y,
            height,
            cells,
        }));
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReportBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportBuilder")
            .field("pages", &self.document.page_count())
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}
