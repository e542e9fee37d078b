//! Template - Letter of Intent assembly and rendering
//!
//! This crate provides:
//! - The form field model (`FieldName`, `FieldValues`) and JSON parsing
//! - The fixed Letter of Intent template (`assemble`)
//! - Rendering of laid-out pages to PDF bytes via `pdf-core`
//! - The download filename convention
//!
//! # Example
//!
//! ```ignore
//! use template::{generate_loi_pdf, loi_filename, FieldValues};
//!
//! let fields = FieldValues::from_json_str(r#"{"date": "2024-01-15", "buyerName": "XYZ LLC"}"#)?;
//! let pdf_bytes = generate_loi_pdf(&fields)?;
//! std::fs::write(loi_filename(&fields), pdf_bytes)?;
//! ```

mod fields;
mod loi;
pub mod parser;
mod renderer;

pub use fields::{missing_required, validate_required, FieldName, FieldValues};
pub use loi::{assemble, DOCUMENT_TITLE};
pub use parser::{parse_fields, parse_layout_config};
pub use renderer::{generate_loi_pdf, loi_filename, render_pages, LoiGenerator};

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error(
        "Missing required fields: {}",
        .0.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
    )]
    MissingFields(Vec<FieldName>),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
