//! gridtext - Reconstructs the visual layout of extracted page text on a
//! fixed-width character grid.
//!
//! Input is a sequence of positioned glyphs per content stream and a page
//! width; output is one space-padded line of text per visual line.

pub mod api;
pub mod converter;
pub mod error;
pub mod layout;
pub mod utils;

// Re-export high_level at the crate root
pub use api::high_level;

pub use error::{LayoutError, Result};
