//! layout2txt - Reconstruct page layout as plain text from glyph dumps
//!
//! A command line tool that reads per-page glyph positions written by an
//! external text extractor (see `input.rs` for the JSON format) and prints
//! each page on a fixed-width character grid.

mod input;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use gridtext_core::converter::TextConverter;
use gridtext_core::high_level::{LayoutOptions, layout_pages};
use gridtext_core::layout::{DEFAULT_CELL_WIDTH, LayoutParams};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// A command line tool for reconstructing the visual layout of extracted
/// page text on a fixed-width character grid.
#[derive(Parser, Debug)]
#[command(name = "layout2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more glyph dump files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Width of one output character cell in layout units
    #[arg(short = 'W', long = "cell-width", default_value_t = DEFAULT_CELL_WIDTH)]
    cell_width: f64,

    /// A comma or space separated list of page numbers to lay out (1-indexed)
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// The maximum number of pages to lay out (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Number of worker threads (default: available parallelism)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Write a "Page N" header before each page
    #[arg(long = "show-pageno", action = ArgAction::SetTrue)]
    show_pageno: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Parse 1-indexed page numbers into zero-indexed ones.
fn parse_page_numbers(list: Option<&str>) -> Option<Vec<usize>> {
    let nums: Vec<usize> = list?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.saturating_sub(1))
        .collect();
    if nums.is_empty() { None } else { Some(nums) }
}

fn build_options(args: &Args) -> Result<LayoutOptions> {
    Ok(LayoutOptions {
        params: LayoutParams::new(args.cell_width)?,
        page_numbers: parse_page_numbers(args.page_numbers.as_deref()),
        maxpages: args.maxpages,
        threads: args.threads,
    })
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Process a single glyph dump file.
fn process_file<W: Write>(
    path: &Path,
    converter: &mut TextConverter<'_, W>,
    options: &LayoutOptions,
) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let document = input::parse_document(&data)
        .with_context(|| format!("invalid glyph dump {}", path.display()))?;
    debug!(file = %path.display(), pages = document.pages.len(), "loaded glyph dump");

    let pages = layout_pages(&document, Some(options.clone()))
        .with_context(|| format!("failed to lay out {}", path.display()))?;
    for page in &pages {
        converter.receive_layout(page)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let options = build_options(&args)?;

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    let mut converter = TextConverter::new(&mut output, args.show_pageno);
    for path in &args.files {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        process_file(path, &mut converter, &options)?;
    }

    // Ensure output is flushed
    converter.close()?;

    Ok(())
}
