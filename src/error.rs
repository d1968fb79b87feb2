//! Error types for supplyreport.

use std::io;
use thiserror::Error;

/// Result type alias for supplyreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, writing or inspecting reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Table columns disagree between headers, widths and rows.
    #[error("Table shape mismatch: {what} has {found} columns, expected {expected}")]
    ShapeMismatch {
        /// Which part of the table is inconsistent (e.g. "column_widths", "row 3")
        what: String,
        /// Column count defined by the headers
        expected: usize,
        /// Column count actually supplied
        found: usize,
    },

    /// Content was added after the document was finalized.
    #[error("Document is finalized; no further content can be added")]
    DocumentFinalized,

    /// Output was requested before any page was added.
    #[error("Document has no pages")]
    EmptyDocument,

    /// Page geometry or block dimensions are unusable.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Error building or reading the PDF object graph.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// The data is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error producing a layout dump (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A prediction collaborator failed.
    #[error("Prediction error: {0}")]
    Prediction(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}
