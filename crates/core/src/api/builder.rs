//! Builder pattern for document layout.
//!
//! Provides a fluent API for configuring and running a conversion.
//!
//! # Example
//! ```
//! use gridtext_core::api::LayoutBuilder;
//! use gridtext_core::layout::{Document, Page, PositionedGlyph};
//!
//! let doc = Document::new(vec![Page::new(1, Some(80.0)).with_stream(vec![
//!     PositionedGlyph::new("x", 8.0, 700.0, 4.0, 10.0, 2.0),
//! ])]);
//! let text = LayoutBuilder::new(&doc)
//!     .cell_width(8.0)
//!     .pages(0..1)
//!     .parallel(2)
//!     .layout_text()?;
//! assert_eq!(text, " x        \n");
//! # Ok::<(), gridtext_core::LayoutError>(())
//! ```

use std::io::Write;
use std::ops::Range;

use crate::error::Result;
use crate::layout::{Document, LayoutParams, PageLayout};

use super::high_level::{LayoutOptions, layout_pages, layout_text, layout_text_to_fp};

/// A builder for configuring a document layout conversion.
///
/// This provides a fluent API that wraps the underlying `LayoutOptions`
/// and layout functions.
#[derive(Debug, Clone)]
pub struct LayoutBuilder<'d> {
    document: &'d Document,
    pages: Option<Range<usize>>,
    page_numbers: Option<Vec<usize>>,
    maxpages: usize,
    threads: Option<usize>,
    params: LayoutParams,
}

impl<'d> LayoutBuilder<'d> {
    /// Creates a new LayoutBuilder for the given document.
    pub fn new(document: &'d Document) -> Self {
        Self {
            document,
            pages: None,
            page_numbers: None,
            maxpages: 0,
            threads: None,
            params: LayoutParams::default(),
        }
    }

    /// Sets the width of one output cell in layout units.
    ///
    /// The value is validated when the conversion runs.
    pub fn cell_width(mut self, cell_width: f64) -> Self {
        self.params.cell_width = cell_width;
        self
    }

    /// Sets the layout parameters.
    pub fn params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    /// Sets a range of pages to lay out (zero-indexed).
    ///
    /// Note: This replaces any previously set page_numbers.
    pub fn pages(mut self, range: Range<usize>) -> Self {
        self.pages = Some(range);
        self.page_numbers = None;
        self
    }

    /// Sets specific page numbers to lay out (zero-indexed).
    ///
    /// Note: This replaces any previously set pages range.
    pub fn page_numbers(mut self, numbers: Vec<usize>) -> Self {
        self.page_numbers = Some(numbers);
        self.pages = None;
        self
    }

    /// Sets the maximum number of pages to lay out (0 means no limit).
    pub fn maxpages(mut self, max: usize) -> Self {
        self.maxpages = max;
        self
    }

    /// Sets the worker thread count. Values below 2 lay pages out on a
    /// single worker.
    pub fn parallel(mut self, thread_count: usize) -> Self {
        self.threads = Some(thread_count.max(1));
        self
    }

    /// Builds the `LayoutOptions` from this builder's configuration.
    fn build_options(&self) -> LayoutOptions {
        let page_numbers = if let Some(ref range) = self.pages {
            Some(range.clone().collect())
        } else {
            self.page_numbers.clone()
        };

        LayoutOptions {
            params: self.params,
            page_numbers,
            maxpages: self.maxpages,
            threads: self.threads,
        }
    }

    /// Lays out the selected pages.
    pub fn layout_pages(self) -> Result<Vec<PageLayout>> {
        layout_pages(self.document, Some(self.build_options()))
    }

    /// Lays out the selected pages as a single string.
    pub fn layout_text(self) -> Result<String> {
        layout_text(self.document, Some(self.build_options()))
    }

    /// Lays out the selected pages to a writer.
    pub fn layout_text_to_fp<W: Write>(self, writer: &mut W) -> Result<()> {
        layout_text_to_fp(self.document, writer, Some(self.build_options()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Page;

    #[test]
    fn pages_range_replaces_page_numbers() {
        let doc = Document::default();
        let options = LayoutBuilder::new(&doc)
            .page_numbers(vec![4])
            .pages(1..3)
            .build_options();
        assert_eq!(options.page_numbers, Some(vec![1, 2]));
    }

    #[test]
    fn page_numbers_replace_pages_range() {
        let doc = Document::default();
        let options = LayoutBuilder::new(&doc)
            .pages(1..3)
            .page_numbers(vec![0, 5])
            .build_options();
        assert_eq!(options.page_numbers, Some(vec![0, 5]));
    }

    #[test]
    fn builder_lays_out_selected_pages() {
        let doc = Document::new(vec![
            Page::new(1, Some(8.0)).with_stream(Vec::new()),
            Page::new(2, Some(12.0)).with_stream(Vec::new()),
        ]);
        let pages = LayoutBuilder::new(&doc)
            .page_numbers(vec![1])
            .parallel(1)
            .layout_pages()
            .unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number(), 2);
        assert_eq!(pages[0].line_length(), 3);
    }
}
