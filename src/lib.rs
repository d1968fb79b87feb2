//! # supplyreport
//!
//! Paginated PDF summary reports for supply chain dashboards.
//!
//! The core is [`ReportBuilder`], a layout engine with a running vertical
//! cursor. It breaks pages automatically, draws a header and footer on every
//! page, and serializes the result into PDF bytes. [`SupplyChainReport`]
//! drives it with typed supplier, shipment, KPI and prediction data.
//!
//! ## Quick Start
//!
//! ```
//! use supplyreport::{ReportBuilder, ReportOptions};
//!
//! fn main() -> supplyreport::Result<()> {
//!     let options = ReportOptions::new().with_title("Weekly Summary");
//!     let mut report = ReportBuilder::with_options(options)?;
//!     report.add_page()?;
//!     report.add_section("Key Metrics")?;
//!     report.add_metric("Inventory Turnover", "5.21", Some("(-6.7%)"))?;
//!     report.add_table(
//!         &[["Acme", "95.0%"]],
//!         &[60.0, 40.0],
//!         &["Supplier", "Reliability"],
//!     )?;
//!
//!     let pdf = report.output()?;
//!     assert!(pdf.starts_with(b"%PDF-"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Automatic pagination**: blocks that would cross the footer area move
//!   to a new page; tables continue row by row
//! - **Header/footer callbacks**: replaceable per-page decorations
//! - **Stylesheets**: per-role fonts instead of hard-coded font switches
//! - **Read-back**: [`inspect`] decodes the produced PDF for verification
//! - **Parallel rendering**: [`render_many`] renders reports with Rayon

pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod pdf;
pub mod render;
pub mod style;
pub mod supply_chain;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{default_footer, default_header, Decoration, PageCanvas, ReportBuilder};
pub use model::{
    metric_line, CellRole, ContentBlock, Document, Element, Metadata, Page, TableBlock,
    TableRowCells, TextCell,
};
pub use options::{Margins, PageSize, ReportOptions, DEFAULT_TITLE};
pub use pdf::{inspect, InspectedDocument, InspectedPage, TextRun, PDF_MIME_TYPE, PDF_VERSION};
pub use render::JsonFormat;
pub use style::{Alignment, FontFace, StyleSheet, TextStyle};
pub use supply_chain::{
    render_many, InventoryForecastModel, KpiMetric, Predictors, PredictiveInsights,
    ReliabilityCategory, ShipmentDelayModel, ShipmentState, ShipmentStatus, Supplier,
    SupplierReliabilityModel, SupplyChainData, SupplyChainReport,
};

use std::path::Path;

/// Render a supply chain report with default options.
///
/// # Example
///
/// ```
/// use supplyreport::{generate_report, SupplyChainData};
///
/// let pdf = generate_report(&SupplyChainData::sample()).unwrap();
/// assert!(pdf.starts_with(b"%PDF-"));
/// ```
pub fn generate_report(data: &SupplyChainData) -> Result<Vec<u8>> {
    generate_report_with_options(data, ReportOptions::default())
}

/// Render a supply chain report with custom options.
///
/// # Example
///
/// ```
/// use supplyreport::{generate_report_with_options, PageSize, ReportOptions, SupplyChainData};
///
/// let options = ReportOptions::new()
///     .with_page_size(PageSize::Letter)
///     .with_compression(false);
/// let pdf = generate_report_with_options(&SupplyChainData::sample(), options).unwrap();
/// assert!(!pdf.is_empty());
/// ```
pub fn generate_report_with_options(data: &SupplyChainData, options: ReportOptions) -> Result<Vec<u8>> {
    SupplyChainReport::new(options).render(data)
}

/// Inspect a PDF file on disk.
///
/// # Example
///
/// ```no_run
/// use supplyreport::inspect_file;
///
/// let report = inspect_file("SupplyChainReport.pdf").unwrap();
/// println!("Pages: {}", report.page_count());
/// ```
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<InspectedDocument> {
    let data = std::fs::read(path)?;
    inspect(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_sample() {
        let pdf = generate_report(&SupplyChainData::sample()).unwrap();
        let doc = inspect(&pdf).unwrap();
        assert_eq!(doc.version, PDF_VERSION);
        assert!(doc.page_count() >= 1);
        assert!(doc
            .all_texts()
            .any(|t| t == "Inventory Turnover: 5.21 (-6.7%)"));
    }

    #[test]
    fn test_generate_report_invalid_options() {
        let options = ReportOptions::new().with_line_height(0.0);
        let result = generate_report_with_options(&SupplyChainData::sample(), options);
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_inspect_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        std::fs::write(&path, generate_report(&SupplyChainData::sample()).unwrap()).unwrap();

        let doc = inspect_file(&path).unwrap();
        assert!(doc.all_texts().any(|t| t == "Shipment Tracking"));
    }

    #[test]
    fn test_inspect_file_missing() {
        let result = inspect_file("does/not/exist.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_inspect_empty_data() {
        let data: [u8; 0] = [];
        assert!(matches!(inspect(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_inspect_truncated_pdf() {
        // valid signature, no body
        assert!(inspect(b"%PDF-1.5\n").is_err());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(PDF_MIME_TYPE, "application/pdf");
    }
}
