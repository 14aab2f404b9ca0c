//! Page model and per-page layout driver.
//!
//! A page carries its width and the glyph streams (articles) an extractor
//! grouped for it. Each stream is sorted into reading order, segmented into
//! grid lines, and the lines are concatenated in stream order.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::utils::{cell_count, round_half_up};

use super::glyph::PositionedGlyph;
use super::grid::GridLine;
use super::params::LayoutParams;
use super::segment::segment;

/// One page of extracted glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Horizontal extent in layout units; pages without one are skipped
    pub width: Option<f64>,
    /// Content streams in the order the extractor supplied them
    pub streams: Vec<Vec<PositionedGlyph>>,
}

impl Page {
    pub fn new(number: usize, width: Option<f64>) -> Self {
        Self {
            number,
            width,
            streams: Vec::new(),
        }
    }

    /// Appends a content stream.
    pub fn with_stream(mut self, glyphs: Vec<PositionedGlyph>) -> Self {
        self.streams.push(glyphs);
        self
    }

    /// The page width if it is a positive finite number.
    pub fn usable_width(&self) -> Option<f64> {
        self.width.filter(|w| w.is_finite() && *w > 0.0)
    }
}

/// A whole document: pages in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

/// Reconstructed text lines of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    page_number: usize,
    line_length: usize,
    lines: Vec<GridLine>,
}

impl PageLayout {
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    /// Number of cells in every line of this page.
    pub const fn line_length(&self) -> usize {
        self.line_length
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<GridLine> {
        self.lines
    }

    /// All lines, each followed by a line feed.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.lines.len() * (self.line_length + 1));
        for line in &self.lines {
            out.extend(line.cells());
            out.push('\n');
        }
        out
    }
}

/// Orders glyphs top to bottom, then left to right.
///
/// Vertical positions are compared after half-up rounding so baseline jitter
/// does not reorder a line. The sort is stable: ties keep extractor order.
pub fn reading_order(glyphs: &[PositionedGlyph]) -> Vec<&PositionedGlyph> {
    let mut ordered: Vec<&PositionedGlyph> = glyphs.iter().collect();
    ordered.sort_by(|a, b| compare_reading_order(a, b));
    ordered
}

fn compare_reading_order(a: &PositionedGlyph, b: &PositionedGlyph) -> Ordering {
    round_half_up(b.y())
        .total_cmp(&round_half_up(a.y()))
        .then_with(|| a.x().total_cmp(&b.x()))
}

/// Lays out one page.
///
/// Fails with [`LayoutError::MissingPageGeometry`] if the page has no usable
/// width. Glyph-level problems never fail the page.
pub fn layout_page(page: &Page, params: &LayoutParams) -> Result<PageLayout> {
    params.validate()?;
    let width = page
        .usable_width()
        .ok_or(LayoutError::MissingPageGeometry { page: page.number })?;

    let mut lines = Vec::new();
    for stream in &page.streams {
        lines.extend(segment(reading_order(stream), width, params));
    }
    debug!(
        page = page.number,
        streams = page.streams.len(),
        lines = lines.len(),
        "laid out page"
    );

    Ok(PageLayout {
        page_number: page.number,
        line_length: cell_count(width, params.cell_width),
        lines,
    })
}
