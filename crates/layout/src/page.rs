//! Laid-out pages

use pdf_core::{Color, FontWeight};

/// A single positioned line of text ready for the PDF writer
///
/// `y` is the baseline in PDF user space (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct TextDrawOp {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub weight: FontWeight,
    pub size: f32,
    pub color: Color,
}

/// One page of positioned text, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub operations: Vec<TextDrawOp>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
        }
    }

    /// True when nothing is drawn on the page
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Text of every line on the page, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.text.as_str())
    }
}
