//! Document model types for laid-out reports.
//!
//! The builder produces this model; the PDF writer, the layout dumps and the
//! tests all read it. It records exactly what was drawn where, so page
//! breaks and table splits can be checked without parsing PDF bytes.

mod block;
mod document;
mod page;

pub use block::{metric_line, ContentBlock, TableBlock};
pub use document::{Document, Metadata};
pub use page::{CellRole, Element, Page, TableRowCells, TextCell};
