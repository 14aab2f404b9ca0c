//! Output converters for reconstructed page layouts.
//!
//! - TextConverter: plain text output, one grid line per record

mod text;

pub use text::TextConverter;
