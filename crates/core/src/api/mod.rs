//! High-level API module for document layout.
//!
//! This module provides the main public API for reconstructing page text
//! from positioned glyphs.
//!
//! # Example
//!
//! ```
//! use gridtext_core::api::layout_text;
//! use gridtext_core::layout::{Document, Page, PositionedGlyph};
//!
//! let page = Page::new(1, Some(400.0)).with_stream(vec![
//!     PositionedGlyph::new("A", 0.0, 700.0, 8.0, 10.0, 4.0),
//! ]);
//! let text = layout_text(&Document::new(vec![page]), None)?;
//! assert_eq!(text.len(), 101);
//! # Ok::<(), gridtext_core::LayoutError>(())
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::LayoutBuilder;
pub use high_level::{LayoutOptions, layout_pages, layout_text, layout_text_to_fp};
