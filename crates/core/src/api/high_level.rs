//! High-level layout API.
//!
//! Provides the main public API for reconstructing document text:
//! - `layout_text()` - Lay out all selected pages as a String
//! - `layout_text_to_fp()` - Lay out pages to a writer
//! - `layout_pages()` - Laid out pages as `PageLayout` values

use std::io::Write;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::debug;

use crate::converter::TextConverter;
use crate::error::{LayoutError, Result};
use crate::layout::{Document, LayoutParams, Page, PageLayout, layout_page};

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for a document conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Layout parameters shared by every page.
    pub params: LayoutParams,

    /// Zero-indexed page numbers to lay out. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Maximum number of pages to lay out. 0 means no limit.
    pub maxpages: usize,

    /// Worker threads for page-parallel layout. None uses available
    /// parallelism.
    pub threads: Option<usize>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            params: LayoutParams::default(),
            page_numbers: None,
            maxpages: 0,
            threads: None,
        }
    }
}

/// Lay out the selected pages of a document.
///
/// Pages are independent, so they are laid out on a rayon pool and returned
/// in document order. Pages without a usable width are skipped.
///
/// # Errors
/// Returns [`LayoutError::EmptyDocument`] if the document has no pages and
/// [`LayoutError::InvalidParams`] for rejected options.
///
/// # Example
/// ```
/// use gridtext_core::high_level::layout_pages;
/// use gridtext_core::layout::{Document, Page, PositionedGlyph};
///
/// let page = Page::new(1, Some(400.0)).with_stream(vec![
///     PositionedGlyph::new("A", 0.0, 700.0, 8.0, 10.0, 4.0),
/// ]);
/// let pages = layout_pages(&Document::new(vec![page]), None)?;
/// assert_eq!(pages[0].lines()[0].text().trim_end(), "A");
/// # Ok::<(), gridtext_core::LayoutError>(())
/// ```
pub fn layout_pages(document: &Document, options: Option<LayoutOptions>) -> Result<Vec<PageLayout>> {
    let options = options.unwrap_or_default();
    options.params.validate()?;
    if document.pages.is_empty() {
        return Err(LayoutError::EmptyDocument);
    }

    let thread_count = match options.threads {
        Some(0) => {
            return Err(LayoutError::InvalidParams(
                "thread count must be at least 1".to_string(),
            ));
        }
        Some(n) => n,
        None => default_thread_count(),
    };
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| LayoutError::InvalidParams(e.to_string()))?;

    let selected = select_pages(
        &document.pages,
        options.page_numbers.as_deref(),
        options.maxpages,
    );
    let params = options.params;
    let results: Vec<Result<PageLayout>> = pool.install(|| {
        selected
            .into_par_iter()
            .map(|page| layout_page(page, &params))
            .collect()
    });

    let mut layouts = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(layout) => layouts.push(layout),
            Err(LayoutError::MissingPageGeometry { page }) => {
                debug!(page, "skipping page without usable width");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(layouts)
}

/// Lay out a document and return its text.
///
/// Every line is followed by a line feed; pages follow each other directly.
pub fn layout_text(document: &Document, options: Option<LayoutOptions>) -> Result<String> {
    let pages = layout_pages(document, options)?;
    Ok(pages.iter().map(PageLayout::text).collect())
}

/// Lay out a document and write its text to a writer.
///
/// # Example
/// ```
/// use gridtext_core::high_level::layout_text_to_fp;
/// use gridtext_core::layout::{Document, Page};
///
/// let doc = Document::new(vec![Page::new(1, Some(16.0)).with_stream(Vec::new())]);
/// let mut out = Vec::new();
/// layout_text_to_fp(&doc, &mut out, None)?;
/// assert_eq!(out, b"    \n");
/// # Ok::<(), gridtext_core::LayoutError>(())
/// ```
pub fn layout_text_to_fp<W: Write>(
    document: &Document,
    writer: &mut W,
    options: Option<LayoutOptions>,
) -> Result<()> {
    let pages = layout_pages(document, options)?;
    let mut converter = TextConverter::new(writer, false);
    for page in &pages {
        converter.receive_layout(page)?;
    }
    converter.close()
}

/// Applies page selection and the page limit, keeping document order.
fn select_pages<'d>(
    pages: &'d [Page],
    page_numbers: Option<&[usize]>,
    maxpages: usize,
) -> Vec<&'d Page> {
    let mut selected = Vec::new();
    for (page_idx, page) in pages.iter().enumerate() {
        if let Some(nums) = page_numbers
            && !nums.contains(&page_idx)
        {
            continue;
        }

        if maxpages > 0 && selected.len() >= maxpages {
            break;
        }

        selected.push(page);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_pages(n: usize) -> Vec<Page> {
        (1..=n).map(|i| Page::new(i, Some(40.0))).collect()
    }

    fn numbers(pages: &[&Page]) -> Vec<usize> {
        pages.iter().map(|p| p.number).collect()
    }

    #[test]
    fn select_pages_defaults_to_all() {
        let pages = numbered_pages(3);
        assert_eq!(numbers(&select_pages(&pages, None, 0)), vec![1, 2, 3]);
    }

    #[test]
    fn select_pages_filters_by_zero_based_index() {
        let pages = numbered_pages(4);
        assert_eq!(numbers(&select_pages(&pages, Some(&[3, 1]), 0)), vec![2, 4]);
    }

    #[test]
    fn select_pages_honors_maxpages() {
        let pages = numbered_pages(5);
        assert_eq!(numbers(&select_pages(&pages, None, 2)), vec![1, 2]);
        assert_eq!(numbers(&select_pages(&pages, Some(&[1, 3, 4]), 2)), vec![2, 4]);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let doc = Document::new(numbered_pages(1));
        let options = LayoutOptions {
            threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            layout_pages(&doc, Some(options)),
            Err(LayoutError::InvalidParams(_))
        ));
    }
}
