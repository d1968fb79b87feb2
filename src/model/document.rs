//! Document-level types.

use super::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A laid-out report: metadata plus an ordered sequence of pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Pages in the document
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// The page currently being written.
    pub fn last_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total bordered table rows across all pages.
    pub fn table_row_count(&self) -> usize {
        self.pages.iter().map(|p| p.table_rows().count()).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata written to the PDF Info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// Creation date. Left unset by default so output stays reproducible.
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the creator application.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Format a timestamp as a PDF date string (`D:YYYYMMDDHHmmSS+00'00'`).
    pub fn pdf_date(date: &DateTime<Utc>) -> String {
        format!("D:{}+00'00'", date.format("%Y%m%d%H%M%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_new() {
        let doc = Document::new(Metadata::default());
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(0).is_none());
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_get_page_is_one_indexed() {
        let mut doc = Document::default();
        doc.add_page(Page::new(1, 210.0, 297.0));
        doc.add_page(Page::new(2, 210.0, 297.0));
        assert_eq!(doc.get_page(2).map(|p| p.number), Some(2));
        assert!(doc.get_page(3).is_none());
    }

    #[test]
    fn test_pdf_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 25, 14, 5, 9).unwrap();
        assert_eq!(Metadata::pdf_date(&date), "D:20240325140509+00'00'");
    }

    #[test]
    fn test_metadata_builder() {
        let meta = Metadata::titled("Report")
            .with_author("Ops")
            .with_creator("supplyreport");
        assert_eq!(meta.title.as_deref(), Some("Report"));
        assert_eq!(meta.author.as_deref(), Some("Ops"));
        assert!(meta.created.is_none());
    }
}
