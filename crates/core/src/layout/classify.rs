//! Glyph classification relative to the preceding glyph.
//!
//! Derives the word and line relations that drive grid placement from the
//! horizontal gap between two glyphs and their rounded vertical positions.

use crate::error::{LayoutError, Result};
use crate::utils::round_half_up;

use super::glyph::PositionedGlyph;

/// A glyph plus the relational facts computed against its predecessor.
///
/// The flags are not mutually exclusive: a glyph can both start a word and
/// be close to the previous word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedGlyph<'a> {
    glyph: &'a PositionedGlyph,
    value: char,
    part_of_previous_word: bool,
    start_of_word: bool,
    start_of_new_line: bool,
    close_to_previous_word: bool,
}

impl<'a> ClassifiedGlyph<'a> {
    pub const fn glyph(&self) -> &'a PositionedGlyph {
        self.glyph
    }

    /// Character written to the grid.
    pub const fn value(&self) -> char {
        self.value
    }

    /// Horizontal position of the glyph.
    pub const fn x(&self) -> f64 {
        self.glyph.x()
    }

    /// Gap to the predecessor is at most one unit and the predecessor is
    /// not a space.
    pub const fn is_part_of_previous_word(&self) -> bool {
        self.part_of_previous_word
    }

    pub const fn is_start_of_word(&self) -> bool {
        self.start_of_word
    }

    pub const fn is_start_of_new_line(&self) -> bool {
        self.start_of_new_line
    }

    /// Gap to the predecessor is wider than one unit but no wider than the
    /// rounded-up space width.
    pub const fn is_close_to_previous_word(&self) -> bool {
        self.close_to_previous_word
    }
}

/// Absolute rounded distance from `previous`'s right edge to `glyph`'s left edge.
pub fn horizontal_gap(previous: &PositionedGlyph, glyph: &PositionedGlyph) -> f64 {
    round_half_up(glyph.x() - previous.right_edge()).abs()
}

/// Classifies `glyph` against `previous`.
///
/// `first_on_line` is set while nothing has been placed on the current line
/// yet; such a glyph always starts a new line and a new word, and is never
/// close to a previous word. `part_of_previous_word` is still computed
/// against `previous` when one exists.
///
/// Fails when the glyph has no character, one of its metrics is not finite,
/// or a glyph that is not first on its line has no predecessor. A
/// predecessor with non-finite metrics yields all-false gap relations.
pub fn classify<'a>(
    glyph: &'a PositionedGlyph,
    previous: Option<&PositionedGlyph>,
    first_on_line: bool,
) -> Result<ClassifiedGlyph<'a>> {
    let value = glyph.display_char().ok_or(LayoutError::EmptyGlyph {
        x: glyph.x(),
        y: glyph.y(),
    })?;
    if let Some(field) = glyph.non_finite_field() {
        return Err(LayoutError::NonFiniteMetric {
            text: glyph.text().to_string(),
            field,
        });
    }

    let part_of_previous_word =
        previous.is_some_and(|prev| !prev.is_space() && horizontal_gap(prev, glyph) <= 1.0);

    if first_on_line {
        return Ok(ClassifiedGlyph {
            glyph,
            value,
            part_of_previous_word,
            start_of_word: true,
            start_of_new_line: true,
            close_to_previous_word: false,
        });
    }

    let prev = previous.ok_or_else(|| LayoutError::MissingPredecessor {
        text: glyph.text().to_string(),
    })?;
    let gap = horizontal_gap(prev, glyph);
    let start_of_new_line = round_half_up(glyph.y()) < round_half_up(prev.y());

    Ok(ClassifiedGlyph {
        glyph,
        value,
        part_of_previous_word,
        start_of_word: gap > 1.0 || start_of_new_line,
        start_of_new_line,
        close_to_previous_word: gap > 1.0 && gap <= glyph.space_width().ceil(),
    })
}
