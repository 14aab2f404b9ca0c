//! Layout reconstruction module.
//!
//! This module contains:
//! - The glyph model (PositionedGlyph) and page model (Page, Document)
//! - Layout parameters (LayoutParams)
//! - Glyph classification, grid lines and line segmentation
//! - The per-page layout driver

pub mod classify;
pub mod glyph;
pub mod grid;
pub mod page;
pub mod params;
pub mod segment;

pub use classify::{ClassifiedGlyph, classify, horizontal_gap};
pub use glyph::{PositionedGlyph, PositionedGlyphBuilder};
pub use grid::GridLine;
pub use page::{Document, Page, PageLayout, layout_page, reading_order};
pub use params::{DEFAULT_CELL_WIDTH, LayoutParams};
pub use segment::{LineSegmenter, line_breaks_between, segment};
