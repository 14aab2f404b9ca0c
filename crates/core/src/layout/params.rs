//! Layout reconstruction parameters.
//!
//! Contains the LayoutParams struct shared by every stage of a conversion.

use crate::error::{LayoutError, Result};

/// Default width of one output character cell, in layout units (points).
pub const DEFAULT_CELL_WIDTH: f64 = 4.0;

/// Parameters for layout reconstruction.
///
/// A single instance must be used for a whole document so that every line
/// has the same length and horizontal scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Width of one grid cell in layout units. Line length is
    /// `floor(page_width / cell_width)` and a glyph at `x` maps to cell
    /// `floor(x / cell_width)`.
    pub cell_width: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl LayoutParams {
    /// Creates layout parameters, rejecting a non-positive or non-finite
    /// cell width.
    pub fn new(cell_width: f64) -> Result<Self> {
        let params = Self { cell_width };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.cell_width.is_finite() || self.cell_width <= 0.0 {
            return Err(LayoutError::InvalidParams(format!(
                "cell_width must be a positive number, got {}",
                self.cell_width
            )));
        }
        Ok(())
    }
}
