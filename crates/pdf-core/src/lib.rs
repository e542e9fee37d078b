//! PDF Core - Low-level PDF writing
//!
//! This crate provides functionality for:
//! - Measuring text against font metrics (built-in Times faces or TrueType)
//! - Embedding TrueType fonts
//! - Creating documents page by page and drawing positioned text runs
//! - Serializing the result to PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{FontFace, FontWeight, PdfDocument};
//!
//! let mut doc = PdfDocument::new(FontFace::default());
//! let page = doc.add_page(612.0, 792.0);
//! doc.insert_text(page, 72.0, 720.0, "Hello, World!", FontWeight::Regular, 11.0)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod metrics;
mod text;

pub use document::PdfDocument;
pub use font::{
    FontData, FontFace, FontFamily, FontFamilyBuilder, FontWeight, TextMeasure, TimesFamily,
};
pub use metrics::StandardFont;
pub use text::{
    encode_literal, encode_win_ansi, format_number, generate_text_operators, win_ansi_byte,
    Color, TextRenderContext,
};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// US Letter page size in points (8.5" x 11")
pub mod pagesize {
    /// Letter width in points
    pub const LETTER_WIDTH: f64 = 612.0;
    /// Letter height in points
    pub const LETTER_HEIGHT: f64 = 792.0;
    /// Points per inch
    pub const POINTS_PER_INCH: f64 = 72.0;
}
