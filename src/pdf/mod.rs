//! PDF serialization and read-back.

mod encoding;
pub mod inspect;
mod writer;

pub use encoding::{decode_win_ansi, encode_win_ansi};
pub use inspect::{inspect, InspectedDocument, InspectedPage, LopdfBackend, PdfBackend, TextRun};
pub use writer::{write_document, PDF_VERSION};

/// MIME type of the produced files.
pub const PDF_MIME_TYPE: &str = "application/pdf";
