//! Line segmentation of a glyph stream.
//!
//! Walks glyphs in reading order, infers blank lines from vertical jumps and
//! hands each same-line run to a [`GridLine`].

use tracing::warn;

use crate::error::Result;
use crate::utils::round_half_up;

use super::classify::classify;
use super::glyph::PositionedGlyph;
use super::grid::GridLine;
use super::params::LayoutParams;

/// Number of line breaks implied between `previous` and `glyph`.
///
/// - no predecessor: 1
/// - text moved down the page: `max(1, floor(dy / height) - 1)` where `dy`
///   is the difference of the rounded vertical positions and `height` is
///   the height of `glyph`
/// - same or higher position: 0
///
/// A glyph without a positive finite height counts as a single break.
pub fn line_breaks_between(previous: Option<&PositionedGlyph>, glyph: &PositionedGlyph) -> usize {
    let Some(previous) = previous else {
        return 1;
    };

    let y = round_half_up(glyph.y());
    let previous_y = round_half_up(previous.y());
    if y >= previous_y {
        return 0;
    }

    let height = glyph.height();
    let lines = ((previous_y - y).floor() / height).floor();
    if height <= 0.0 || !lines.is_finite() {
        return 1;
    }
    (lines as usize).saturating_sub(1).max(1)
}

/// Splits a glyph stream into grid lines.
///
/// Owns the glyph buffer of the current visual line, the previous-glyph
/// cursor and the finished lines of one content stream.
#[derive(Debug)]
pub struct LineSegmenter<'a> {
    page_width: f64,
    params: LayoutParams,
    lines: Vec<GridLine>,
    buffer: Vec<&'a PositionedGlyph>,
    /// Stream glyph preceding the first glyph of `buffer`
    line_predecessor: Option<&'a PositionedGlyph>,
    previous: Option<&'a PositionedGlyph>,
}

impl<'a> LineSegmenter<'a> {
    pub fn new(page_width: f64, params: &LayoutParams) -> Self {
        Self {
            page_width,
            params: *params,
            lines: Vec::new(),
            buffer: Vec::new(),
            line_predecessor: None,
            previous: None,
        }
    }

    /// Feeds the next glyph of the stream.
    pub fn push(&mut self, glyph: &'a PositionedGlyph) {
        let breaks = line_breaks_between(self.previous, glyph);
        if breaks > 0 && self.previous.is_some() {
            self.flush();
            for _ in 1..breaks {
                let blank = self.blank_line();
                self.lines.push(blank);
            }
            self.line_predecessor = self.previous;
        }
        self.buffer.push(glyph);
        self.previous = Some(glyph);
    }

    /// Flushes the last buffered line and returns every line of the stream.
    ///
    /// The last line is emitted even when no glyph was pushed, so an empty
    /// stream yields one blank line.
    pub fn finish(mut self) -> Vec<GridLine> {
        self.flush();
        self.lines
    }

    fn blank_line(&self) -> GridLine {
        GridLine::new(self.page_width, &self.params)
    }

    fn flush(&mut self) {
        let line = match self.build_line() {
            Ok(line) => line,
            Err(err) => {
                warn!(
                    line = self.lines.len(),
                    glyphs = self.buffer.len(),
                    error = %err,
                    "abandoning line after glyph placement failure"
                );
                self.blank_line()
            }
        };
        self.lines.push(line);
        self.buffer.clear();
    }

    fn build_line(&self) -> Result<GridLine> {
        let mut line = self.blank_line();
        let mut previous = self.line_predecessor;
        for (i, &glyph) in self.buffer.iter().enumerate() {
            let classified = classify(glyph, previous, i == 0)?;
            line.place(&classified);
            previous = Some(glyph);
        }
        Ok(line)
    }
}

/// Segments a whole glyph stream, already in reading order, into grid lines.
pub fn segment<'a, I>(glyphs: I, page_width: f64, params: &LayoutParams) -> Vec<GridLine>
where
    I: IntoIterator<Item = &'a PositionedGlyph>,
{
    let mut segmenter = LineSegmenter::new(page_width, params);
    for glyph in glyphs {
        segmenter.push(glyph);
    }
    segmenter.finish()
}
