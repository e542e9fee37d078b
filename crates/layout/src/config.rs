//! Page geometry

use pdf_core::pagesize::{LETTER_HEIGHT, LETTER_WIDTH, POINTS_PER_INCH};
use serde::{Deserialize, Serialize};

/// Page size, margin and default line spacing, all in points
///
/// Every key is optional when deserializing; missing keys take the US Letter
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page_width: f64,
    pub page_height: f64,
    /// Same margin on all four sides
    pub margin: f64,
    /// Line height as a multiple of font size
    pub line_height_factor: f64,
}

impl LayoutConfig {
    /// US Letter with one-inch margins and 1.4 line spacing
    pub fn letter() -> Self {
        Self {
            page_width: LETTER_WIDTH,
            page_height: LETTER_HEIGHT,
            margin: POINTS_PER_INCH,
            line_height_factor: 1.4,
        }
    }

    /// Wrap width: page width minus both side margins
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Cursor position at the top of a fresh page
    pub fn top(&self) -> f64 {
        self.page_height - self.margin
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::letter()
    }
}
