//! Positioned glyph: the unit of input handed over by a text extractor.
//!
//! Use `PositionedGlyph::builder()` to construct glyphs with optional metrics.

/// Builder for PositionedGlyph with fluent API for optional metrics.
///
/// # Example
/// ```
/// use gridtext_core::layout::PositionedGlyph;
///
/// let glyph = PositionedGlyph::builder("A", 72.0, 700.0)
///     .width(8.0)
///     .height(10.0)
///     .space_width(4.0)
///     .build();
/// assert_eq!(glyph.right_edge(), 80.0);
/// ```
#[derive(Debug, Clone)]
pub struct PositionedGlyphBuilder {
    text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    space_width: f64,
}

impl PositionedGlyphBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: width=0.0, height=1.0, space_width=0.0.
    pub fn new(text: &str, x: f64, y: f64) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
            width: 0.0,
            height: 1.0,
            space_width: 0.0,
        }
    }

    /// Sets the advance width of the glyph.
    pub const fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the glyph height (used as the line pitch for blank-line counting).
    pub const fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the nominal space width of the glyph's font.
    pub const fn space_width(mut self, space_width: f64) -> Self {
        self.space_width = space_width;
        self
    }

    /// Builds the PositionedGlyph instance.
    pub fn build(self) -> PositionedGlyph {
        PositionedGlyph {
            text: self.text,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            space_width: self.space_width,
        }
    }
}

/// One rendered character with its position and font metrics.
///
/// `y` grows towards the top of the page, so text further down the page has
/// a smaller `y`. The core never mutates a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    /// Font-reported average advance of a space
    space_width: f64,
}

impl PositionedGlyph {
    /// Creates a new builder for constructing PositionedGlyph instances.
    pub fn builder(text: &str, x: f64, y: f64) -> PositionedGlyphBuilder {
        PositionedGlyphBuilder::new(text, x, y)
    }

    /// Creates a glyph with every metric given.
    pub fn new(text: &str, x: f64, y: f64, width: f64, height: f64, space_width: f64) -> Self {
        Self::builder(text, x, y)
            .width(width)
            .height(height)
            .space_width(space_width)
            .build()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The display character: the first character of the reported text.
    ///
    /// Extractors may report ligatures as several characters; only the
    /// first one occupies a grid cell.
    pub fn display_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub const fn space_width(&self) -> f64 {
        self.space_width
    }

    /// Horizontal position of the glyph's right edge.
    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Returns true if this glyph is a literal space.
    pub fn is_space(&self) -> bool {
        self.text == " "
    }

    /// Name of the first non-finite metric, if any.
    pub(crate) fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("space_width", self.space_width),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}
