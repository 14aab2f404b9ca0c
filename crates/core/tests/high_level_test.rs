//! Tests for the document-level layout API.

use gridtext_core::LayoutError;
use gridtext_core::api::LayoutBuilder;
use gridtext_core::high_level::{LayoutOptions, layout_pages, layout_text, layout_text_to_fp};
use gridtext_core::layout::{Document, LayoutParams, Page, PositionedGlyph};

fn word(text: &str, x: f64, y: f64) -> Vec<PositionedGlyph> {
    text.chars()
        .enumerate()
        .map(|(i, c)| PositionedGlyph::new(&c.to_string(), x + 8.0 * i as f64, y, 8.0, 10.0, 4.0))
        .collect()
}

fn inventory_page() -> Page {
    let rows = [
        ("Name", "Qty", 700.0),
        ("Apple", "3", 688.0),
        ("Kiwi", "12", 676.0),
    ];
    let mut glyphs = Vec::new();
    for (name, qty, y) in rows {
        glyphs.extend(word(name, 0.0, y));
        glyphs.extend(word(qty, 80.0, y));
    }
    glyphs.extend(word("Big", 0.0, 664.0));
    glyphs.extend(word("fig", 27.0, 664.0));
    glyphs.extend(word("7", 80.0, 664.0));
    Page::new(1, Some(200.0)).with_stream(glyphs)
}

fn lettered_document(n: usize) -> Document {
    let pages = (0..n)
        .map(|i| {
            let letter = char::from(b'a' + (i % 26) as u8).to_string();
            Page::new(i + 1, Some(40.0)).with_stream(word(&letter, 0.0, 700.0))
        })
        .collect();
    Document::new(pages)
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_inventory_columns_snapshot() {
    let text = layout_text(&Document::new(vec![inventory_page()]), None).unwrap();
    let trimmed: Vec<&str> = text.lines().map(str::trim_end).collect();
    insta::assert_snapshot!(trimmed.join("\n"), @r"
    Name                Qty
    Apple               3
    Kiwi                12
    Big fig             7
    ");
}

#[test]
fn test_every_line_has_page_width() {
    let text = layout_text(&Document::new(vec![inventory_page()]), None).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().all(|l| l.chars().count() == 50));
    assert!(text.ends_with('\n'));
}

#[test]
fn test_layout_is_idempotent() {
    let doc = Document::new(vec![inventory_page(), inventory_page()]);
    assert_eq!(
        layout_text(&doc, None).unwrap(),
        layout_text(&doc, None).unwrap()
    );
}

#[test]
fn test_cell_width_rescales_lines_and_indices() {
    let page = Page::new(1, Some(400.0)).with_stream(
        [word("A", 0.0, 700.0), word("B", 40.0, 700.0)].concat(),
    );
    let options = LayoutOptions {
        params: LayoutParams::new(8.0).unwrap(),
        ..Default::default()
    };
    let pages = layout_pages(&Document::new(vec![page]), Some(options)).unwrap();
    assert_eq!(pages[0].line_length(), 50);
    assert_eq!(pages[0].lines()[0].cells()[5], 'B');
}

// ============================================================================
// Page handling
// ============================================================================

#[test]
fn test_empty_document_is_an_error() {
    assert!(matches!(
        layout_pages(&Document::default(), None),
        Err(LayoutError::EmptyDocument)
    ));
}

#[test]
fn test_pages_without_width_are_skipped() {
    let doc = Document::new(vec![
        Page::new(1, None).with_stream(word("lost", 0.0, 700.0)),
        Page::new(2, Some(40.0)).with_stream(word("kept", 0.0, 700.0)),
    ]);
    let pages = layout_pages(&doc, None).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_number(), 2);
    assert_eq!(layout_text(&doc, None).unwrap(), "kept      \n");
}

#[test]
fn test_parallel_layout_keeps_page_order() {
    let doc = lettered_document(40);
    let options = LayoutOptions {
        threads: Some(4),
        ..Default::default()
    };
    let pages = layout_pages(&doc, Some(options)).unwrap();
    let numbers: Vec<usize> = pages.iter().map(|p| p.page_number()).collect();
    assert_eq!(numbers, (1..=40).collect::<Vec<_>>());

    let sequential = LayoutOptions {
        threads: Some(1),
        ..Default::default()
    };
    assert_eq!(
        layout_text(&doc, Some(sequential)).unwrap(),
        layout_text(&doc, None).unwrap()
    );
}

#[test]
fn test_page_selection_and_limit() {
    let doc = lettered_document(5);
    let options = LayoutOptions {
        page_numbers: Some(vec![4, 1, 3]),
        maxpages: 2,
        ..Default::default()
    };
    let text = layout_text(&doc, Some(options)).unwrap();
    assert_eq!(text, "b         \nd         \n");
}

#[test]
fn test_invalid_cell_width_is_rejected() {
    let options = LayoutOptions {
        params: LayoutParams {
            cell_width: f64::NAN,
        },
        ..Default::default()
    };
    assert!(matches!(
        layout_pages(&lettered_document(1), Some(options)),
        Err(LayoutError::InvalidParams(_))
    ));
    assert!(LayoutParams::new(-1.0).is_err());
}

// ============================================================================
// Writers and builder
// ============================================================================

#[test]
fn test_layout_text_to_fp_matches_layout_text() {
    let doc = Document::new(vec![inventory_page()]);
    let mut out = Vec::new();
    layout_text_to_fp(&doc, &mut out, None).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), layout_text(&doc, None).unwrap());
}

#[test]
fn test_builder_matches_options() {
    let doc = lettered_document(6);
    let from_builder = LayoutBuilder::new(&doc)
        .pages(2..4)
        .parallel(3)
        .layout_text()
        .unwrap();
    assert_eq!(from_builder, "c         \nd         \n");

    let mut out = Vec::new();
    LayoutBuilder::new(&doc)
        .maxpages(1)
        .layout_text_to_fp(&mut out)
        .unwrap();
    assert_eq!(out, b"a         \n");
}
