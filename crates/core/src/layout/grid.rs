//! Grid line: a fixed-width row of character cells.
//!
//! Glyphs are placed left to right. A cell holding a character is never
//! overwritten, and successive writes never move left of the previous one
//! except when a glyph is merged back onto the tail of the word it
//! continues.

use std::fmt;

use tracing::trace;

use crate::utils::{cell_count, cell_index};

use super::classify::ClassifiedGlyph;
use super::params::LayoutParams;

const SPACE: char = ' ';

/// One output line of fixed length, initially all spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    cells: Vec<char>,
    cell_width: f64,
    /// Index of the last placement, `None` until something is placed
    last_index: Option<usize>,
}

impl GridLine {
    /// Creates a blank line for a page `page_width` layout units wide.
    ///
    /// The line holds `floor(page_width / cell_width)` cells.
    pub fn new(page_width: f64, params: &LayoutParams) -> Self {
        Self::with_len(cell_count(page_width, params.cell_width), params)
    }

    /// Creates a blank line of exactly `len` cells.
    pub fn with_len(len: usize, params: &LayoutParams) -> Self {
        Self {
            cells: vec![SPACE; len],
            cell_width: params.cell_width,
            last_index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if every cell is a space.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == SPACE)
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Index of the last placement on this line.
    pub const fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// The line as a space-padded string of exactly `len()` characters.
    pub fn text(&self) -> String {
        self.cells.iter().collect()
    }

    /// Places a classified glyph and returns the index it was written at.
    ///
    /// Returns `None` when the glyph is dropped: its raw index lies off the
    /// grid, the adjusted index runs past the end of the line, or the target
    /// cell is already occupied.
    pub fn place(&mut self, glyph: &ClassifiedGlyph<'_>) -> Option<usize> {
        let raw = cell_index(glyph.x(), self.cell_width, self.cells.len())?;

        let mut target = if glyph.is_part_of_previous_word() && !glyph.is_start_of_new_line() {
            self.space_run_start(raw)
        } else if glyph.is_close_to_previous_word() {
            if self.cells[raw] != SPACE {
                raw + 1
            } else {
                self.space_run_start(raw) + 1
            }
        } else {
            raw
        };

        if let Some(last) = self.last_index
            && target <= last
        {
            target = last + 1;
        }
        if !glyph.is_part_of_previous_word() && self.is_occupied_before(target) {
            target += 1;
        }
        self.last_index = Some(target);

        trace!(
            index = target,
            value = %glyph.value(),
            part_of_previous_word = glyph.is_part_of_previous_word(),
            start_of_word = glyph.is_start_of_word(),
            start_of_new_line = glyph.is_start_of_new_line(),
            close_to_previous_word = glyph.is_close_to_previous_word(),
            "place glyph"
        );

        match self.cells.get_mut(target) {
            Some(cell) if *cell == SPACE => {
                *cell = glyph.value();
                Some(target)
            }
            _ => None,
        }
    }

    /// Start of the run of spaces ending at `index`.
    ///
    /// Scans left while cells are spaces. If `index` itself is occupied the
    /// result is `index + 1`; if the scan reaches the start of the line the
    /// result is 0, even when that crosses earlier words.
    fn space_run_start(&self, index: usize) -> usize {
        self.cells[..=index]
            .iter()
            .rposition(|&c| c != SPACE)
            .map_or(0, |occupied| occupied + 1)
    }

    fn is_occupied_before(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .is_some_and(|&c| c != SPACE)
    }
}

impl fmt::Display for GridLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.cells {
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_from(text: &str) -> GridLine {
        GridLine {
            cells: text.chars().collect(),
            cell_width: 4.0,
            last_index: None,
        }
    }

    #[test]
    fn space_run_start_stops_after_last_character() {
        let line = line_from("ab   ");
        assert_eq!(line.space_run_start(4), 2);
        assert_eq!(line.space_run_start(2), 2);
    }

    #[test]
    fn space_run_start_on_occupied_cell_is_next_index() {
        let line = line_from("ab   ");
        assert_eq!(line.space_run_start(1), 2);
    }

    #[test]
    fn space_run_start_clamps_to_zero() {
        let line = line_from("     ");
        assert_eq!(line.space_run_start(3), 0);
    }

    #[test]
    fn occupied_before_checks_previous_cell() {
        let line = line_from("a  ");
        assert!(line.is_occupied_before(1));
        assert!(!line.is_occupied_before(2));
        assert!(!line.is_occupied_before(0));
        assert!(!line.is_occupied_before(10));
    }
}
