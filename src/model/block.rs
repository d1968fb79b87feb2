//! Content blocks accepted by the report builder.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One discrete unit of report content.
///
/// Blocks are immutable once built; the builder consumes them and advances
/// its cursor by their rendered height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Emphasized section title
    Section {
        /// Title text
        title: String,
    },

    /// A single `label: value trend` line
    Metric {
        /// Metric label
        label: String,
        /// Formatted value
        value: String,
        /// Optional trend annotation, e.g. "(+5.9%)"
        trend: Option<String>,
    },

    /// A bordered table with fixed column widths
    Table(TableBlock),

    /// Word-wrapped text spanning the content width
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// Vertical gap
    Spacing {
        /// Gap height
        height: f32,
    },
}

impl ContentBlock {
    /// Create a section block.
    pub fn section(title: impl Into<String>) -> Self {
        ContentBlock::Section {
            title: title.into(),
        }
    }

    /// Create a metric block.
    pub fn metric(
        label: impl Into<String>,
        value: impl Into<String>,
        trend: Option<impl Into<String>>,
    ) -> Self {
        ContentBlock::Metric {
            label: label.into(),
            value: value.into(),
            trend: trend.map(Into::into),
        }
    }

    /// Create a table block, validating its shape.
    pub fn table<R, C, H>(rows: &[R], column_widths: &[f32], headers: &[H]) -> Result<Self>
    where
        R: AsRef<[C]>,
        C: ToString,
        H: AsRef<str>,
    {
        TableBlock::new(rows, column_widths, headers).map(ContentBlock::Table)
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    /// Create a spacing block.
    pub fn spacing(height: f32) -> Self {
        ContentBlock::Spacing { height }
    }

    /// Short name of the block type.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Section { .. } => "section",
            ContentBlock::Metric { .. } => "metric",
            ContentBlock::Table(_) => "table",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Spacing { .. } => "spacing",
        }
    }
}

/// Format a metric line as `"{label}: {value} {trend}"`.
///
/// Without a trend the line ends at the value.
pub fn metric_line(label: &str, value: &str, trend: Option<&str>) -> String {
    match trend {
        Some(trend) if !trend.is_empty() => format!("{}: {} {}", label, value, trend),
        _ => format!("{}: {}", label, value),
    }
}

/// A validated table: headers, widths and every row share one column count.
///
/// Deserialization runs the same checks as [`TableBlock::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct TableBlock {
    headers: Vec<String>,
    column_widths: Vec<f32>,
    rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Build a table, coercing cell values to strings.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the widths or any row disagree
    /// with the header count, and with [`Error::InvalidLayout`] for a
    /// non-positive or non-finite width.
    pub fn new<R, C, H>(rows: &[R], column_widths: &[f32], headers: &[H]) -> Result<Self>
    where
        R: AsRef<[C]>,
        C: ToString,
        H: AsRef<str>,
    {
        let expected = headers.len();
        if expected == 0 {
            return Err(Error::InvalidLayout("table has no columns".to_string()));
        }

        if column_widths.len() != expected {
            return Err(Error::ShapeMismatch {
                what: "column_widths".to_string(),
                expected,
                found: column_widths.len(),
            });
        }

        for (index, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != expected {
                return Err(Error::ShapeMismatch {
                    what: format!("row {}", index + 1),
                    expected,
                    found,
                });
            }
        }

        if let Some(width) = column_widths
            .iter()
            .find(|w| !w.is_finite() || **w <= 0.0)
        {
            return Err(Error::InvalidLayout(format!(
                "column width must be positive, got {}",
                width
            )));
        }

        Ok(Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            column_widths: column_widths.to_vec(),
            rows: rows
                .iter()
                .map(|row| row.as_ref().iter().map(ToString::to_string).collect())
                .collect(),
        })
    }

    /// Header labels.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column widths.
    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of bordered rows this table renders (header + data).
    pub fn rendered_row_count(&self) -> usize {
        1 + self.rows.len()
    }

    /// Sum of the column widths.
    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }
}

#[derive(Deserialize)]
struct RawTable {
    headers: Vec<String>,
    column_widths: Vec<f32>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for TableBlock {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        TableBlock::new(&raw.rows, &raw.column_widths, &raw.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_width_mismatch() {
        let result = TableBlock::new(&[["x", "y"]], &[10.0], &["A", "B"]);
        assert!(matches!(
            result,
            Err(Error::ShapeMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_table_row_mismatch() {
        let rows = vec![vec!["a", "b"], vec!["c"]];
        let err = TableBlock::new(&rows, &[10.0, 10.0], &["A", "B"]).unwrap_err();
        match err {
            Error::ShapeMismatch { what, found, .. } => {
                assert_eq!(what, "row 2");
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_table_coerces_values() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let table = TableBlock::new(&rows, &[20.0, 30.0], &["N", "M"]).unwrap();
        assert_eq!(table.rows()[1], vec!["3".to_string(), "4".to_string()]);
        assert_eq!(table.rendered_row_count(), 3);
        assert_eq!(table.total_width(), 50.0);
    }

    #[test]
    fn test_table_rejects_negative_width() {
        let result = TableBlock::new(&[["x"]], &[-5.0], &["A"]);
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_table_without_rows() {
        let rows: Vec<Vec<String>> = Vec::new();
        let table = TableBlock::new(&rows, &[10.0], &["Only"]).unwrap();
        assert_eq!(table.rendered_row_count(), 1);
    }

    #[test]
    fn test_metric_line() {
        assert_eq!(
            metric_line("Inventory Turnover", "5.21", Some("(-6.7%)")),
            "Inventory Turnover: 5.21 (-6.7%)"
        );
        assert_eq!(metric_line("Alert", "none", None), "Alert: none");
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let ok = r#"{"type":"table","headers":["A"],"column_widths":[10.0],"rows":[["x"]]}"#;
        let block: ContentBlock = serde_json::from_str(ok).unwrap();
        assert_eq!(block.kind(), "table");

        let ragged = r#"{"type":"table","headers":["A","B"],"column_widths":[10.0,10.0],"rows":[["x"]]}"#;
        assert!(serde_json::from_str::<ContentBlock>(ragged).is_err());
    }

    #[test]
    fn test_block_kind() {
        assert_eq!(ContentBlock::section("Overview").kind(), "section");
        assert_eq!(ContentBlock::metric("a", "b", None::<String>).kind(), "metric");
        assert_eq!(ContentBlock::spacing(10.0).kind(), "spacing");
    }
}
