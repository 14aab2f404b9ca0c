//! Error types for gridtext layout reconstruction.

use thiserror::Error;

/// Primary error type for layout operations.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("page {page} has no usable width")]
    MissingPageGeometry { page: usize },

    #[error("glyph at ({x}, {y}) carries no character")]
    EmptyGlyph { x: f64, y: f64 },

    #[error("glyph {text:?} has a non-finite {field}")]
    NonFiniteMetric { text: String, field: &'static str },

    #[error("glyph {text:?} is not first on its line but has no predecessor")]
    MissingPredecessor { text: String },

    #[error("document has no pages")]
    EmptyDocument,

    #[error("invalid layout parameters: {0}")]
    InvalidParams(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Returns true for failures that only affect a single glyph run.
    ///
    /// These are absorbed by the line segmenter instead of being surfaced.
    pub const fn is_glyph_placement(&self) -> bool {
        matches!(
            self,
            Self::EmptyGlyph { .. } | Self::NonFiniteMetric { .. } | Self::MissingPredecessor { .. }
        )
    }
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
