//! PDF Document writer

use crate::text::{encode_literal, encode_win_ansi, generate_text_operators, TextRenderContext};
use crate::{Color, FontData, FontFace, FontWeight, PdfError, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Write;
use std::path::Path;

/// Resource name for the regular face
const REGULAR_RESOURCE: &str = "F1";
/// Resource name for the bold face
const BOLD_RESOURCE: &str = "F2";

const PRODUCER: &str = "loi-pdf";

/// Content buffered for one page until the document is serialized
#[derive(Debug, Clone)]
struct PageBuffer {
    width: f64,
    height: f64,
    content: Vec<u8>,
}

/// A new PDF document built page by page
///
/// Text is drawn with explicit PDF coordinates (origin bottom-left). Content
/// is buffered and the lopdf object graph is only assembled in
/// [`PdfDocument::to_bytes`] / [`PdfDocument::save`], once every character an
/// embedded font must cover is known.
pub struct PdfDocument {
    /// Fonts all text is drawn with
    fonts: FontFace,
    /// Pages in order (page number = index + 1)
    pages: Vec<PageBuffer>,
    /// Current text color
    current_text_color: Color,
    /// Document title written to the Info dictionary
    title: Option<String>,
}

impl PdfDocument {
    /// Create an empty document drawing with `fonts`
    ///
    /// # Example
    /// ```ignore
    /// let mut doc = PdfDocument::new(FontFace::default());
    /// let page = doc.add_page(612.0, 792.0);
    /// doc.insert_text(page, 72.0, 720.0, "Hello", FontWeight::Bold, 16.0)?;
    /// ```
    pub fn new(fonts: FontFace) -> Self {
        Self {
            fonts,
            pages: Vec::new(),
            current_text_color: Color::default(),
            title: None,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Size of a page in points as `(width, height)`
    pub fn page_size(&self, page: usize) -> Result<(f64, f64)> {
        let buffer = self.page_buffer(page)?;
        Ok((buffer.width, buffer.height))
    }

    /// Fonts this document draws with
    pub fn fonts(&self) -> &FontFace {
        &self.fonts
    }

    /// Append a blank page
    ///
    /// # Returns
    /// New page number (1-indexed)
    pub fn add_page(&mut self, width: f64, height: f64) -> usize {
        self.pages.push(PageBuffer {
            width,
            height,
            content: Vec::new(),
        });
        self.pages.len()
    }

    /// Set the document title (Info dictionary)
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the text color used by subsequent [`PdfDocument::insert_text`] calls
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Draw a run of text
    ///
    /// # Arguments
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate of the run start in points
    /// * `y` - Baseline Y coordinate in points (from bottom)
    /// * `text` - Text to draw; empty text draws nothing
    /// * `weight` - Face to use
    /// * `size` - Font size in points
    pub fn insert_text(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        text: &str,
        weight: FontWeight,
        size: f32,
    ) -> Result<()> {
        self.page_buffer(page)?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let resource = self.resource_name(weight);
        let operand = match &mut self.fonts {
            FontFace::Standard(_) => encode_literal(&encode_win_ansi(text)),
            FontFace::Embedded(family) => {
                let font_data = family.get_variant_mut(weight);
                // Track characters for widths and ToUnicode
                font_data.add_chars(text);
                font_data.encode_text_hex(text).into_bytes()
            }
        };

        let ctx = TextRenderContext {
            font_name: resource.to_string(),
            font_size: size,
            color: self.current_text_color,
        };
        let operators = generate_text_operators(&operand, x, y, &ctx);

        self.pages[page - 1].content.extend_from_slice(&operators);
        Ok(())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.build()?;
        doc.save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.build()?;

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    fn page_buffer(&self, page: usize) -> Result<&PageBuffer> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }
        Ok(&self.pages[page - 1])
    }

    /// Content stream resource name for a weight
    ///
    /// An embedded family without a bold face draws bold text with the
    /// regular face, so it shares that resource.
    fn resource_name(&self, weight: FontWeight) -> &'static str {
        match (&self.fonts, weight) {
            (_, FontWeight::Regular) => REGULAR_RESOURCE,
            (FontFace::Standard(_), FontWeight::Bold) => BOLD_RESOURCE,
            (FontFace::Embedded(family), FontWeight::Bold) => {
                if family.has_bold() {
                    BOLD_RESOURCE
                } else {
                    REGULAR_RESOURCE
                }
            }
        }
    }

    /// Assemble the complete lopdf object graph
    fn build(&self) -> Result<Document> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_dict = self.embed_fonts(&mut doc)?;
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(font_dict),
        )]));

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let contents_id = doc.add_object(compress_content(&page.content)?);
            let page_dict = Dictionary::from_iter(vec![
                ("Type", "Page".into()),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        pdf_number(page.width),
                        pdf_number(page.height),
                    ]),
                ),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(contents_id)),
            ]);
            kids.push(Object::Reference(doc.add_object(page_dict)));
        }

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", "Pages".into()),
            ("Count", Object::Integer(kids.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", "Catalog".into()),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut info = Dictionary::from_iter(vec![("Producer", Object::string_literal(PRODUCER))]);
        if let Some(title) = &self.title {
            info.set("Title", text_string(title));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", Object::Reference(info_id));

        log::debug!("assembled PDF with {} page(s)", self.pages.len());
        Ok(doc)
    }

    /// Add font objects to `doc` and return the resource Font dictionary
    fn embed_fonts(&self, doc: &mut Document) -> Result<Dictionary> {
        let mut font_dict = Dictionary::new();

        match &self.fonts {
            FontFace::Standard(times) => {
                for (resource, weight) in [
                    (REGULAR_RESOURCE, FontWeight::Regular),
                    (BOLD_RESOURCE, FontWeight::Bold),
                ] {
                    let font = Dictionary::from_iter(vec![
                        ("Type", "Font".into()),
                        ("Subtype", "Type1".into()),
                        ("BaseFont", times.font(weight).base_font().into()),
                        ("Encoding", "WinAnsiEncoding".into()),
                    ]);
                    font_dict.set(resource, Object::Reference(doc.add_object(font)));
                }
            }
            FontFace::Embedded(family) => {
                let mut variants = vec![(REGULAR_RESOURCE, &family.regular)];
                if let Some(bold) = &family.bold {
                    variants.push((BOLD_RESOURCE, bold));
                }
                for (resource, font_data) in variants {
                    if font_data.used_chars.is_empty() {
                        continue;
                    }
                    let font_id = embed_font_object(doc, font_data)?;
                    font_dict.set(resource, Object::Reference(font_id));
                }
            }
        }

        Ok(font_dict)
    }
}

/// Embed a single TrueType font and return its Type0 object
fn embed_font_object(doc: &mut Document, font_data: &FontData) -> Result<ObjectId> {
    let font_objects = font_data.to_pdf_objects()?;

    let font_file_id = doc.add_object(font_objects.font_file_stream);

    let mut font_descriptor = font_objects.font_descriptor;
    font_descriptor.set("FontFile2", Object::Reference(font_file_id));
    let font_descriptor_id = doc.add_object(font_descriptor);

    let mut cid_font = font_objects.cid_font;
    cid_font.set("FontDescriptor", Object::Reference(font_descriptor_id));
    let cid_font_id = doc.add_object(cid_font);

    let mut type0_font = font_objects.type0_font;
    type0_font.set(
        "DescendantFonts",
        Object::Array(vec![Object::Reference(cid_font_id)]),
    );

    let tounicode_id = doc.add_object(font_objects.tounicode_stream);
    type0_font.set("ToUnicode", Object::Reference(tounicode_id));

    log::debug!(
        "embedded font {} ({} glyphs)",
        font_data.name,
        font_data.used_chars.len()
    );
    Ok(doc.add_object(type0_font))
}

/// Flate-compress a content stream
fn compress_content(content: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    let compressed = encoder.finish()?;

    Ok(Stream::new(
        Dictionary::from_iter(vec![("Filter", Object::from("FlateDecode"))]),
        compressed,
    ))
}

fn pdf_number(value: f64) -> Object {
    if value.fract() == 0.0 {
        Object::Integer(value as i64)
    } else {
        Object::Real(value as f32)
    }
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
