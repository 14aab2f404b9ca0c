//! Glyph dump input format.
//!
//! An external extractor writes one JSON document per file:
//!
//! ```json
//! {"pages": [{"width": 612.0, "streams": [[
//!     {"text": "A", "x": 72.0, "y": 700.0, "width": 8.0, "height": 10.0, "space_width": 4.0}
//! ]]}]}
//! ```
//!
//! Pages are numbered from 1 in file order. A page with a null or missing
//! width is kept so that the layout stage can skip it.

use gridtext_core::layout::{Document, Page, PositionedGlyph};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub streams: Vec<Vec<GlyphRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct GlyphRecord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub space_width: f64,
}

fn default_height() -> f64 {
    1.0
}

impl From<GlyphRecord> for PositionedGlyph {
    fn from(record: GlyphRecord) -> Self {
        PositionedGlyph::builder(&record.text, record.x, record.y)
            .width(record.width)
            .height(record.height)
            .space_width(record.space_width)
            .build()
    }
}

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        let pages = record
            .pages
            .into_iter()
            .enumerate()
            .map(|(idx, page)| Page {
                number: idx + 1,
                width: page.width,
                streams: page
                    .streams
                    .into_iter()
                    .map(|stream| stream.into_iter().map(PositionedGlyph::from).collect())
                    .collect(),
            })
            .collect();
        Document::new(pages)
    }
}

/// Parse a glyph dump into a document.
pub fn parse_document(data: &[u8]) -> serde_json::Result<Document> {
    let record: DocumentRecord = serde_json::from_slice(data)?;
    Ok(record.into())
}
