//! Integration tests for the report builder lifecycle.

use supplyreport::{inspect, ContentBlock, Error, FontFace, ReportBuilder, ReportOptions};

fn titled_builder() -> ReportBuilder {
    let options = ReportOptions::new().with_title("Supply Chain Optimization Dashboard Report");
    ReportBuilder::with_options(options).unwrap()
}

#[test]
fn test_metric_scenario() {
    let mut builder = titled_builder();
    builder.add_page().unwrap();
    builder.add_section("Key Metrics").unwrap();
    builder
        .add_metric("Inventory Turnover", "5.21", Some("(-6.7%)"))
        .unwrap();

    let pdf = builder.output().unwrap();
    assert!(pdf.starts_with(b"%PDF-"));

    let doc = inspect(&pdf).unwrap();
    assert_eq!(doc.page_count(), 1);
    let page = &doc.pages[0];
    assert!(page.has_text("Inventory Turnover: 5.21 (-6.7%)"));
    assert!(page.has_text("Page 1"));

    let section = page.texts.iter().find(|t| t.text == "Key Metrics").unwrap();
    assert_eq!(section.face, Some(FontFace::Bold));
    let footer = page.texts.iter().find(|t| t.text == "Page 1").unwrap();
    assert_eq!(footer.face, Some(FontFace::Italic));
}

#[test]
fn test_metric_without_trend_has_no_trailing_space() {
    let mut builder = titled_builder();
    builder.add_metric("Supplier Risk Alert", "none", None).unwrap();
    let pdf = builder.output().unwrap();
    let doc = inspect(&pdf).unwrap();
    assert!(doc.pages[0].has_text("Supplier Risk Alert: none"));
}

#[test]
fn test_output_is_idempotent() {
    let mut builder = titled_builder();
    builder.add_section("Overview").unwrap();

    let first = builder.output().unwrap();
    let second = builder.output().unwrap();
    assert_eq!(first, second);
    assert!(builder.is_finalized());
    assert_eq!(builder.page_count(), 1);
}

#[test]
fn test_add_after_output_fails() {
    let mut builder = titled_builder();
    builder.add_section("Overview").unwrap();
    builder.output().unwrap();

    assert!(matches!(builder.add_page(), Err(Error::DocumentFinalized)));
    assert!(matches!(
        builder.add_section("Late"),
        Err(Error::DocumentFinalized)
    ));
    assert!(matches!(
        builder.add_metric("Late", "1", None),
        Err(Error::DocumentFinalized)
    ));
    assert!(matches!(
        builder.add_table(&[["x"]], &[10.0], &["A"]),
        Err(Error::DocumentFinalized)
    ));
    assert!(matches!(
        builder.add_block(&ContentBlock::paragraph("late")),
        Err(Error::DocumentFinalized)
    ));
}

#[test]
fn test_shape_mismatch() {
    let mut builder = titled_builder();
    let result = builder.add_table(&[["x", "y"]], &[10.0], &["A", "B"]);
    match result {
        Err(Error::ShapeMismatch {
            expected, found, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
    assert_eq!(builder.document().table_row_count(), 0);
}

#[test]
fn test_ragged_row_is_rejected() {
    let mut builder = titled_builder();
    let rows = vec![vec!["a", "b"], vec!["c"]];
    let result = builder.add_table(&rows, &[20.0, 20.0], &["A", "B"]);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_empty_document_stays_open() {
    let mut builder = titled_builder();
    assert!(matches!(builder.output(), Err(Error::EmptyDocument)));
    assert!(!builder.is_finalized());

    builder.add_section("Now with content").unwrap();
    assert!(builder.output().is_ok());
}

#[test]
fn test_table_renders_header_plus_rows() {
    let mut builder = titled_builder();
    let rows = [
        ["San Francisco, CA -> Austin, TX", "In-transit", "2024-03-25"],
        ["Munich, Germany -> Paris, France", "Delivered", "2024-03-20"],
    ];
    builder
        .add_table(&rows, &[90.0, 50.0, 50.0], &["Route", "Status", "ETA"])
        .unwrap();
    assert_eq!(builder.document().table_row_count(), 3);

    let pdf = builder.output().unwrap();
    let doc = inspect(&pdf).unwrap();
    assert_eq!(doc.pages[0].bordered_cells, 9);
    assert!(doc.pages[0].has_text("Delivered"));
}

#[test]
fn test_blocks_match_direct_calls() {
    let blocks = vec![
        ContentBlock::section("Key Metrics"),
        ContentBlock::metric("Cost Efficiency", "87.1%", Some("(-6.7%)")),
        ContentBlock::table(&[["a", "b"]], &[20.0, 20.0], &["A", "B"]).unwrap(),
        ContentBlock::spacing(10.0),
        ContentBlock::paragraph("Closing remarks."),
    ];

    let mut from_blocks = titled_builder();
    for block in &blocks {
        from_blocks.add_block(block).unwrap();
    }

    let mut direct = titled_builder();
    direct.add_section("Key Metrics").unwrap();
    direct
        .add_metric("Cost Efficiency", "87.1%", Some("(-6.7%)"))
        .unwrap();
    direct.add_table(&[["a", "b"]], &[20.0, 20.0], &["A", "B"]).unwrap();
    direct.add_spacing(10.0).unwrap();
    direct.add_paragraph("Closing remarks.").unwrap();

    assert_eq!(from_blocks.output().unwrap(), direct.output().unwrap());
}

#[test]
fn test_uncompressed_output_loads() {
    let options = ReportOptions::new()
        .with_title("Plain")
        .with_compression(false);
    let mut builder = ReportBuilder::with_options(options).unwrap();
    builder.add_metric("Order Fulfillment Rate", "91.3%", Some("(+5.9%)")).unwrap();
    let pdf = builder.output().unwrap();

    let doc = inspect(&pdf).unwrap();
    assert!(doc.pages[0].has_text("Order Fulfillment Rate: 91.3% (+5.9%)"));
}

#[test]
fn test_non_latin_text_is_replaced() {
    let mut builder = titled_builder();
    builder.add_metric("Route", "上海 -> LA", None).unwrap();
    let pdf = builder.output().unwrap();
    let doc = inspect(&pdf).unwrap();
    assert!(doc.pages[0].has_text("Route: ?? -> LA"));
}
