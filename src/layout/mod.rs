//! Paginated layout: the report builder, its page canvas and text wrapping.

mod builder;
mod canvas;
mod wrap;

pub use builder::ReportBuilder;
pub use canvas::{default_footer, default_header, Decoration, PageCanvas};
pub use wrap::wrap_text;
