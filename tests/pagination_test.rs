//! Integration tests for automatic page breaks.

use supplyreport::{inspect, PageSize, ReportBuilder, ReportOptions};

/// 210 x 100 mm with a title: content runs from 30 to 80, five lines per page.
fn small_page_builder() -> ReportBuilder {
    let options = ReportOptions::new()
        .with_title("Paginated")
        .with_page_size(PageSize::Custom {
            width: 210.0,
            height: 100.0,
        });
    ReportBuilder::with_options(options).unwrap()
}

fn large_table() -> Vec<Vec<String>> {
    (0..50)
        .map(|r| (0..5).map(|c| format!("r{}c{}", r, c)).collect())
        .collect()
}

#[test]
fn test_large_table_spans_pages() {
    let mut builder = small_page_builder();
    builder.add_page().unwrap();
    builder
        .add_table(&large_table(), &[38.0; 5], &["A", "B", "C", "D", "E"])
        .unwrap();
    builder.output().unwrap();

    let doc = builder.document();
    assert!(doc.page_count() > 1);
    // header + 4 rows, then 5 rows per page
    assert_eq!(doc.page_count(), 11);
    assert_eq!(doc.table_row_count(), 51);

    let header_rows: usize = doc
        .pages
        .iter()
        .map(|p| p.table_rows().filter(|r| r.header).count())
        .sum();
    assert_eq!(header_rows, 1);
}

#[test]
fn test_rows_stay_inside_content_area() {
    let mut builder = small_page_builder();
    builder
        .add_table(&large_table(), &[38.0; 5], &["A", "B", "C", "D", "E"])
        .unwrap();
    let bottom = builder.options().content_bottom();

    for page in &builder.document().pages {
        for row in page.table_rows() {
            assert!(row.y >= page.content_top);
            assert!(row.y + row.height <= bottom);
        }
    }
}

#[test]
fn test_footers_number_pages() {
    let mut builder = small_page_builder();
    builder
        .add_table(&large_table(), &[38.0; 5], &["A", "B", "C", "D", "E"])
        .unwrap();
    builder.output().unwrap();

    let footers: Vec<String> = builder
        .document()
        .pages
        .iter()
        .map(|p| p.footer_text().unwrap())
        .collect();
    let expected: Vec<String> = (1..=footers.len()).map(|n| format!("Page {}", n)).collect();
    assert_eq!(footers, expected);
}

#[test]
fn test_pagination_visible_in_pdf() {
    let mut builder = small_page_builder();
    builder
        .add_table(&large_table(), &[38.0; 5], &["A", "B", "C", "D", "E"])
        .unwrap();
    let pdf = builder.output().unwrap();

    let doc = inspect(&pdf).unwrap();
    assert_eq!(doc.page_count(), builder.page_count() as usize);

    let cells: usize = doc.pages.iter().map(|p| p.bordered_cells).sum();
    assert_eq!(cells, 51 * 5);

    for (i, page) in doc.pages.iter().enumerate() {
        assert!(page.has_text(&format!("Page {}", i + 1)));
        assert!(page.has_text("Paginated"));
    }
    assert!(doc.pages.last().unwrap().has_text("r49c4"));
}

#[test]
fn test_metrics_break_like_tables() {
    let mut builder = small_page_builder();
    for i in 0..12 {
        builder.add_metric("Line", &i.to_string(), None).unwrap();
    }
    assert_eq!(builder.page_count(), 3);
    let last = builder.document().get_page(3).unwrap();
    assert_eq!(last.text_cells().filter(|c| c.text.starts_with("Line")).count(), 2);
}

#[test]
fn test_long_paragraph_wraps_and_breaks() {
    let mut builder = small_page_builder();
    let text = "supply chain ".repeat(120);
    builder.add_paragraph(&text).unwrap();
    assert!(builder.page_count() > 1);

    let width = builder.options().content_width();
    for page in &builder.document().pages {
        for cell in page.text_cells() {
            assert!(cell.style.text_width(&cell.text) <= width);
        }
    }
}
