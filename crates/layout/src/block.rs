//! Block model

use pdf_core::{pagesize::POINTS_PER_INCH, Align, FontWeight};

/// Kind of content a block carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    Heading,
    Body,
    SignatureLine,
    /// Vertical gap with no text
    Spacer,
}

/// Typography of a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    /// Font size in points
    pub font_size: f32,
    pub weight: FontWeight,
    pub align: Align,
    /// Line height override in points; `None` uses size × factor
    pub line_height: Option<f64>,
}

impl BlockStyle {
    fn new(font_size: f32, weight: FontWeight, align: Align) -> Self {
        Self {
            font_size,
            weight,
            align,
            line_height: None,
        }
    }

    /// Effective line height for a default spacing `factor`
    pub fn line_height(&self, factor: f64) -> f64 {
        self.line_height
            .unwrap_or(self.font_size as f64 * factor)
    }
}

/// One semantic unit of document content awaiting layout
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    pub style: BlockStyle,
    /// Height of a spacer in points (zero for text blocks)
    pub spacing: f64,
}

impl Block {
    fn text_block(kind: BlockKind, text: impl Into<String>, style: BlockStyle) -> Self {
        Self {
            kind,
            text: text.into(),
            style,
            spacing: 0.0,
        }
    }

    /// Document title: 16pt bold, centered
    pub fn title(text: impl Into<String>) -> Self {
        Self::text_block(
            BlockKind::Title,
            text,
            BlockStyle::new(16.0, FontWeight::Bold, Align::Center),
        )
    }

    /// Section heading: 12pt bold
    pub fn heading(text: impl Into<String>) -> Self {
        Self::text_block(
            BlockKind::Heading,
            text,
            BlockStyle::new(12.0, FontWeight::Bold, Align::Left),
        )
    }

    /// Paragraph text: 11pt regular
    pub fn body(text: impl Into<String>) -> Self {
        Self::text_block(
            BlockKind::Body,
            text,
            BlockStyle::new(11.0, FontWeight::Regular, Align::Left),
        )
    }

    /// Signature block line: 11pt regular
    pub fn signature_line(text: impl Into<String>) -> Self {
        Self::text_block(
            BlockKind::SignatureLine,
            text,
            BlockStyle::new(11.0, FontWeight::Regular, Align::Left),
        )
    }

    /// Signature block caption (party name, acknowledgement): 11pt bold
    pub fn signature_caption(text: impl Into<String>) -> Self {
        Self::text_block(
            BlockKind::SignatureLine,
            text,
            BlockStyle::new(11.0, FontWeight::Bold, Align::Left),
        )
    }

    /// Vertical gap of `points`
    pub fn spacer(points: f64) -> Self {
        Self {
            kind: BlockKind::Spacer,
            text: String::new(),
            style: BlockStyle::new(0.0, FontWeight::Regular, Align::Left),
            spacing: points,
        }
    }

    /// Vertical gap given in inches
    pub fn spacer_inches(inches: f64) -> Self {
        Self::spacer(inches * POINTS_PER_INCH)
    }

    /// Override the line height (points)
    pub fn with_line_height(mut self, points: f64) -> Self {
        self.style.line_height = Some(points);
        self
    }

    pub fn is_spacer(&self) -> bool {
        self.kind == BlockKind::Spacer
    }
}
