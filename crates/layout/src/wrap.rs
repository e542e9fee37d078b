//! Width-constrained word wrap

use pdf_core::{FontWeight, TextMeasure};

/// A wrapped line with its measured width in points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width: f64,
}

/// Greedily pack whitespace-separated words into lines no wider than
/// `max_width`
///
/// Each candidate line (`current + " " + word`) is measured as a whole. A word
/// wider than `max_width` on its own still gets a line to itself. Empty or
/// all-whitespace text yields no lines.
///
/// # Arguments
/// * `text` - Text to wrap
/// * `measure` - Width provider for the font in use
/// * `weight` - Font weight the text is set in
/// * `size` - Font size in points
/// * `max_width` - Maximum line width in points
pub fn wrap_text<M: TextMeasure + ?Sized>(
    text: &str,
    measure: &M,
    weight: FontWeight,
    size: f32,
    max_width: f64,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let candidate = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{current_line} {word}")
        };
        let candidate_width = measure.text_width(&candidate, weight, size);

        if candidate_width <= max_width || current_line.is_empty() {
            // Word fits, or is the first word on the line
            current_line = candidate;
            current_width = candidate_width;
        } else {
            // Word doesn't fit, start new line
            lines.push(Line {
                text: std::mem::take(&mut current_line),
                width: current_width,
            });
            current_width = measure.text_width(word, weight, size);
            current_line = word.to_string();
        }
    }

    // Don't forget the last line
    if !current_line.is_empty() {
        lines.push(Line {
            text: current_line,
            width: current_width,
        });
    }

    lines
}
