//! Text Converter - outputs reconstructed page lines as plain text.

use std::io::Write;

use crate::error::Result;
use crate::layout::PageLayout;

/// Text Converter - writes each grid line followed by a line feed.
pub struct TextConverter<'a, W: Write> {
    /// Output writer
    outfp: &'a mut W,
    /// Whether to write a `Page N` header before each page
    showpageno: bool,
}

impl<'a, W: Write> TextConverter<'a, W> {
    /// Create a new text converter.
    pub fn new(outfp: &'a mut W, showpageno: bool) -> Self {
        Self { outfp, showpageno }
    }

    /// Check if page numbers are shown.
    pub fn show_pageno(&self) -> bool {
        self.showpageno
    }

    /// Write text to output.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Receive and render a laid out page.
    pub fn receive_layout(&mut self, page: &PageLayout) -> Result<()> {
        if self.showpageno {
            let header = format!("Page {}\n", page.page_number());
            self.write_text(&header)?;
        }

        for line in page.lines() {
            self.write_text(&line.text())?;
            self.write_text("\n")?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn close(&mut self) -> Result<()> {
        self.outfp.flush()?;
        Ok(())
    }
}
