//! Letter of Intent rendering

use crate::loi::{assemble, DOCUMENT_TITLE};
use crate::{FieldName, FieldValues, Result};
use layout::{layout, LayoutConfig, Page};
use pdf_core::{FontFace, FontFamily, PdfDocument};

/// Generates Letter of Intent PDFs
///
/// Holds the page geometry and the fonts; each call to
/// [`LoiGenerator::generate`] is independent.
#[derive(Debug, Clone, Default)]
pub struct LoiGenerator {
    config: LayoutConfig,
    face: FontFace,
}

impl LoiGenerator {
    /// US Letter, one-inch margins, Times Roman / Times Bold
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different page geometry
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Measure and draw with an embedded TrueType family instead of Times
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.face = FontFace::Embedded(family);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Assemble and paginate without serializing
    pub fn layout(&self, fields: &FieldValues) -> Vec<Page> {
        let blocks = assemble(fields);
        layout(&blocks, &self.face, &self.config)
    }

    /// Generate the PDF bytes for one set of form values
    pub fn generate(&self, fields: &FieldValues) -> Result<Vec<u8>> {
        let pages = self.layout(fields);
        let doc = render_pages(&pages, self.face.clone())?;
        let bytes = doc.to_bytes()?;

        log::debug!(
            "generated {} ({} pages, {} bytes)",
            loi_filename(fields),
            pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Generate a Letter of Intent with the default generator
pub fn generate_loi_pdf(fields: &FieldValues) -> Result<Vec<u8>> {
    LoiGenerator::new().generate(fields)
}

/// Write laid-out pages into a new PDF document
///
/// Each [`Page`] becomes one PDF page of the same size; each draw operation
/// becomes one text run.
pub fn render_pages(pages: &[Page], face: FontFace) -> Result<PdfDocument> {
    let mut doc = PdfDocument::new(face);
    doc.set_title(DOCUMENT_TITLE);

    for page in pages {
        let page_number = doc.add_page(page.width, page.height);
        for op in &page.operations {
            doc.set_text_color(op.color);
            doc.insert_text(page_number, op.x, op.y, &op.text, op.weight, op.size)?;
        }
    }

    Ok(doc)
}

/// Download filename: `Letter_of_Intent_<date with '-' as '_'>.pdf`
///
/// Falls back to `Letter_of_Intent_document.pdf` without a date.
pub fn loi_filename(fields: &FieldValues) -> String {
    let date = fields
        .get(FieldName::Date)
        .map(|date| date.replace('-', "_"))
        .unwrap_or_else(|| "document".to_string());
    format!("Letter_of_Intent_{date}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_core::FontWeight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_loi_filename() {
        let fields = FieldValues::new().with(FieldName::Date, "2024-01-15");
        assert_eq!(loi_filename(&fields), "Letter_of_Intent_2024_01_15.pdf");
    }

    #[test]
    fn test_loi_filename_without_date() {
        assert_eq!(
            loi_filename(&FieldValues::new()),
            "Letter_of_Intent_document.pdf"
        );
        let blank = FieldValues::new().with(FieldName::Date, "  ");
        assert_eq!(loi_filename(&blank), "Letter_of_Intent_document.pdf");
    }

    #[test]
    fn test_render_pages_preserves_page_count() {
        let mut first = Page::new(612.0, 792.0);
        first.operations.push(layout::TextDrawOp {
            x: 72.0,
            y: 720.0,
            text: "Hello".to_string(),
            weight: FontWeight::Regular,
            size: 11.0,
            color: pdf_core::Color::black(),
        });
        let pages = vec![first, Page::new(612.0, 792.0)];

        let doc = render_pages(&pages, FontFace::default()).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_size(2).unwrap(), (612.0, 792.0));
    }

    #[test]
    fn test_generator_uses_config() {
        let config = LayoutConfig {
            page_width: 595.0,
            page_height: 842.0,
            ..LayoutConfig::letter()
        };
        let generator = LoiGenerator::new().with_config(config);
        let pages = generator.layout(&FieldValues::new());

        assert!(pages.iter().all(|p| p.width == 595.0 && p.height == 842.0));
        assert_eq!(pages[0].operations[0].y, 842.0 - 72.0);
    }
}
