//! The supply chain dashboard report.

use super::data::SupplyChainData;
use crate::error::Result;
use crate::layout::ReportBuilder;
use crate::model::Document;
use crate::options::ReportOptions;
use rayon::prelude::*;

const SUPPLIER_HEADERS: [&str; 5] = ["Supplier", "Location", "Reliability", "Lead Time", "Cost/Unit"];
const SUPPLIER_WIDTHS: [f32; 5] = [50.0, 50.0, 30.0, 30.0, 30.0];

const SHIPMENT_HEADERS: [&str; 3] = ["Route", "Status", "ETA"];
const SHIPMENT_WIDTHS: [f32; 3] = [90.0, 50.0, 50.0];

/// Gap left after each top-level section.
const SECTION_SPACING: f32 = 10.0;

/// Draws [`SupplyChainData`] as a paginated PDF.
///
/// # Example
///
/// ```
/// use supplyreport::{ReportOptions, SupplyChainData, SupplyChainReport};
///
/// let report = SupplyChainReport::new(ReportOptions::default());
/// let bytes = report.render(&SupplyChainData::sample())?;
/// assert!(bytes.starts_with(b"%PDF-"));
/// # Ok::<(), supplyreport::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SupplyChainReport {
    options: ReportOptions,
}

impl SupplyChainReport {
    /// Create a report renderer.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Lay out the report without finalizing it.
    pub fn build(&self, data: &SupplyChainData) -> Result<ReportBuilder> {
        let mut builder = ReportBuilder::with_options(self.options.clone())?;
        builder.add_page()?;

        builder.add_section("Overview")?;
        builder.add_paragraph(&data.overview)?;
        builder.add_spacing(SECTION_SPACING)?;

        if !data.metrics.is_empty() {
            builder.add_section("Key Metrics")?;
            for metric in &data.metrics {
                builder.add_metric(&metric.label, &metric.value, metric.trend.as_deref())?;
            }
            builder.add_spacing(SECTION_SPACING)?;
        }

        if !data.suppliers.is_empty() {
            builder.add_section("Supplier Performance")?;
            let rows: Vec<[String; 5]> = data.suppliers.iter().map(|s| s.table_row()).collect();
            builder.add_table(&rows, &SUPPLIER_WIDTHS, &SUPPLIER_HEADERS)?;
            builder.add_spacing(SECTION_SPACING)?;
        }

        if !data.shipments.is_empty() {
            builder.add_section("Shipment Tracking")?;
            let rows: Vec<[String; 3]> = data.shipments.iter().map(|s| s.table_row()).collect();
            builder.add_table(&rows, &SHIPMENT_WIDTHS, &SHIPMENT_HEADERS)?;
            builder.add_spacing(SECTION_SPACING)?;
        }

        let insights = &data.insights;
        if !insights.is_empty() {
            builder.add_section("Predictive Insights")?;
            if !insights.inventory_forecast.is_empty() {
                let label = format!(
                    "Predicted Inventory Demand (Next {} Days)",
                    insights.inventory_forecast.len()
                );
                builder.add_metric(&label, &insights.forecast_line(), None)?;
            }
            for delay in &insights.shipment_delays {
                builder.add_metric("Potential Shipment Delays", delay, None)?;
            }
            for alert in &insights.supplier_alerts {
                builder.add_metric("Supplier Risk Alert", alert, None)?;
            }
            builder.add_spacing(SECTION_SPACING)?;
        }

        Ok(builder)
    }

    /// Lay out the report and return the document model.
    pub fn layout(&self, data: &SupplyChainData) -> Result<Document> {
        Ok(self.build(data)?.document().clone())
    }

    /// Render the report to PDF bytes.
    pub fn render(&self, data: &SupplyChainData) -> Result<Vec<u8>> {
        self.build(data)?.output()
    }

    /// Render several reports in parallel, one builder each. Results keep
    /// the input order; the first failure is returned.
    pub fn render_many(&self, reports: &[SupplyChainData]) -> Result<Vec<Vec<u8>>> {
        reports.par_iter().map(|data| self.render(data)).collect()
    }
}

/// Render several reports in parallel with shared options.
pub fn render_many(reports: &[SupplyChainData], options: &ReportOptions) -> Result<Vec<Vec<u8>>> {
    SupplyChainReport::new(options.clone()).render_many(reports)
}
