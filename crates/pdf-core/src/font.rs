//! Font handling for PDF documents

use crate::metrics::StandardFont;
use crate::{PdfError, Result};
use lopdf::{Dictionary, Object, Stream};
use std::collections::BTreeSet;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Anything that can report the rendered width of a run of text
///
/// Layout code depends only on this capability, never on a concrete font
/// implementation.
pub trait TextMeasure {
    /// Width in points of `text` set in `weight` at `size` points
    fn text_width(&self, text: &str, weight: FontWeight, size: f32) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, weight: FontWeight, size: f32) -> f64 {
        (**self).text_width(text, weight, size)
    }
}

/// The non-embedded Times family (Times-Roman / Times-Bold)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimesFamily;

impl TimesFamily {
    /// Standard font used for a weight
    pub fn font(&self, weight: FontWeight) -> StandardFont {
        match weight {
            FontWeight::Regular => StandardFont::TimesRoman,
            FontWeight::Bold => StandardFont::TimesBold,
        }
    }
}

impl TextMeasure for TimesFamily {
    fn text_width(&self, text: &str, weight: FontWeight, size: f32) -> f64 {
        self.font(weight).text_width_points(text, size)
    }
}

/// Font data structure for embedded fonts
#[derive(Debug, Clone)]
pub struct FontData {
    /// Font name/identifier
    pub name: String,
    /// Raw TTF data
    pub ttf_data: Vec<u8>,
    /// Characters drawn with this font (for widths and ToUnicode)
    pub used_chars: BTreeSet<char>,
}

/// PDF objects generated for font embedding
pub struct FontObjects {
    /// Type0 font dictionary
    pub type0_font: Dictionary,
    /// CIDFont Type2 dictionary
    pub cid_font: Dictionary,
    /// Font descriptor dictionary
    pub font_descriptor: Dictionary,
    /// Font file stream (TTF data)
    pub font_file_stream: Stream,
    /// ToUnicode CMap stream
    pub tounicode_stream: Stream,
}

/// TrueType font family with a regular and an optional bold variant
#[derive(Debug, Clone)]
pub struct FontFamily {
    /// Regular variant (required)
    pub regular: FontData,
    /// Bold variant
    pub bold: Option<FontData>,
}

impl FontFamily {
    /// Get the font data for the specified weight
    /// Falls back to regular if bold is not available
    pub fn get_variant(&self, weight: FontWeight) -> &FontData {
        match weight {
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }

    /// Mutable counterpart of [`FontFamily::get_variant`]
    pub fn get_variant_mut(&mut self, weight: FontWeight) -> &mut FontData {
        match weight {
            FontWeight::Bold => self.bold.as_mut().unwrap_or(&mut self.regular),
            FontWeight::Regular => &mut self.regular,
        }
    }

    /// Whether a real bold face was supplied
    pub fn has_bold(&self) -> bool {
        self.bold.is_some()
    }
}

impl TextMeasure for FontFamily {
    fn text_width(&self, text: &str, weight: FontWeight, size: f32) -> f64 {
        self.get_variant(weight).text_width_points(text, size) as f64
    }
}

/// Builder for registering font families
#[derive(Default)]
pub struct FontFamilyBuilder {
    regular: Option<Vec<u8>>,
    bold: Option<Vec<u8>>,
}

impl FontFamilyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regular(mut self, ttf_data: Vec<u8>) -> Self {
        self.regular = Some(ttf_data);
        self
    }

    pub fn bold(mut self, ttf_data: Vec<u8>) -> Self {
        self.bold = Some(ttf_data);
        self
    }

    /// Build the FontFamily from the provided TTF data
    pub fn build(self, family_name: &str) -> Result<FontFamily> {
        let regular = match self.regular {
            Some(ttf_data) => FontData::from_ttf(&format!("{family_name}-regular"), &ttf_data)?,
            None => {
                return Err(PdfError::FontParseError(
                    "FontFamily must have at least a regular variant".to_string(),
                ))
            }
        };

        let bold = self
            .bold
            .map(|data| FontData::from_ttf(&format!("{family_name}-bold"), &data))
            .transpose()?;

        Ok(FontFamily { regular, bold })
    }
}

/// The set of fonts a document is drawn with
#[derive(Debug, Clone)]
pub enum FontFace {
    /// Base-14 Times, referenced by name and never embedded
    Standard(TimesFamily),
    /// A TrueType family embedded into the output
    Embedded(FontFamily),
}

impl Default for FontFace {
    fn default() -> Self {
        FontFace::Standard(TimesFamily)
    }
}

impl From<FontFamily> for FontFace {
    fn from(family: FontFamily) -> Self {
        FontFace::Embedded(family)
    }
}

impl TextMeasure for FontFace {
    fn text_width(&self, text: &str, weight: FontWeight, size: f32) -> f64 {
        match self {
            FontFace::Standard(times) => times.text_width(text, weight, size),
            FontFace::Embedded(family) => family.text_width(text, weight, size),
        }
    }
}

impl FontData {
    /// Create font data from TTF bytes
    ///
    /// # Arguments
    /// * `name` - Font identifier
    /// * `ttf_data` - TrueType font file bytes
    pub fn from_ttf(name: &str, ttf_data: &[u8]) -> Result<Self> {
        ttf_parser::Face::parse(ttf_data, 0)
            .map_err(|e| PdfError::FontParseError(format!("{name}: {e:?}")))?;

        Ok(Self {
            name: name.to_string(),
            ttf_data: ttf_data.to_vec(),
            used_chars: BTreeSet::new(),
        })
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.ttf_data, 0).ok()
    }

    /// Add characters to the used set
    pub fn add_chars(&mut self, text: &str) {
        self.used_chars.extend(text.chars());
    }

    /// Get glyph ID for a character
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.face()
            .and_then(|face| face.glyph_index(c).map(|id| id.0))
    }

    /// Get font units per em
    pub fn units_per_em(&self) -> u16 {
        self.face().map(|face| face.units_per_em()).unwrap_or(1000)
    }

    /// Get font ascender
    pub fn ascender(&self) -> i16 {
        self.face().map(|face| face.ascender()).unwrap_or(800)
    }

    /// Get font descender
    pub fn descender(&self) -> i16 {
        self.face().map(|face| face.descender()).unwrap_or(-200)
    }

    /// Calculate text width in font units
    pub fn text_width(&self, text: &str) -> u32 {
        let Some(face) = self.face() else {
            return 0;
        };
        text.chars()
            .filter_map(|c| face.glyph_index(c))
            .filter_map(|gid| face.glyph_hor_advance(gid))
            .map(|w| w as u32)
            .sum()
    }

    /// Calculate text width in points for a given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f32 {
        let width = self.text_width(text);
        let units_per_em = self.units_per_em() as f32;
        (width as f32 / units_per_em) * font_size
    }

    /// Scale font units to the 1/1000 em glyph space PDF expects
    fn to_glyph_space(&self, value: i32) -> i32 {
        value * 1000 / self.units_per_em().max(1) as i32
    }

    /// Generate all PDF objects needed to embed this font
    pub fn to_pdf_objects(&self) -> Result<FontObjects> {
        let font_name = Object::Name(self.name.clone().into_bytes());

        let tounicode_content = self.generate_tounicode_cmap();
        let tounicode_stream = Stream::new(Dictionary::new(), tounicode_content.into_bytes());

        let font_file_stream = Stream::new(
            Dictionary::from_iter(vec![("Length1", (self.ttf_data.len() as i64).into())]),
            self.ttf_data.clone(),
        );

        let ascender = self.to_glyph_space(self.ascender() as i32) as i64;
        let descender = self.to_glyph_space(self.descender() as i32) as i64;

        let font_bbox: Vec<Object> = vec![0.into(), descender.into(), 1000.into(), ascender.into()];

        let font_descriptor = Dictionary::from_iter(vec![
            ("Type", "FontDescriptor".into()),
            ("FontName", font_name.clone()),
            ("Flags", 4.into()), // Symbolic font
            ("FontBBox", font_bbox.into()),
            ("ItalicAngle", 0.into()),
            ("Ascent", ascender.into()),
            ("Descent", descender.into()),
            ("CapHeight", ascender.into()),
            ("StemV", 80.into()),
            ("FontFile2", Object::Reference((0, 0))), // set when embedding
        ]);

        let cid_system_info = Dictionary::from_iter(vec![
            ("Registry", Object::string_literal("Adobe")),
            ("Ordering", Object::string_literal("Identity")),
            ("Supplement", 0.into()),
        ]);

        let cid_font = Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "CIDFontType2".into()),
            ("BaseFont", font_name.clone()),
            ("CIDSystemInfo", cid_system_info.into()),
            ("FontDescriptor", Object::Reference((0, 0))), // set when embedding
            ("CIDToGIDMap", "Identity".into()),
            ("W", self.generate_widths_array().into()),
            ("DW", 1000.into()),
        ]);

        let type0_font = Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "Type0".into()),
            ("BaseFont", font_name),
            ("Encoding", "Identity-H".into()),
            ("DescendantFonts", vec![Object::Reference((0, 0))].into()), // set when embedding
            ("ToUnicode", Object::Reference((0, 0))),                    // set when embedding
        ]);

        Ok(FontObjects {
            type0_font,
            cid_font,
            font_descriptor,
            font_file_stream,
            tounicode_stream,
        })
    }

    /// Encode text as hex string for PDF Tj operator
    pub fn encode_text_hex(&self, text: &str) -> String {
        let face = self.face();
        let mut result = String::new();
        for c in text.chars() {
            let gid = face
                .as_ref()
                .and_then(|f| f.glyph_index(c))
                .map(|id| id.0)
                .unwrap_or(0);
            result.push_str(&format!("{gid:04X}"));
        }
        format!("<{result}>")
    }

    /// Generate /W array for glyph widths
    fn generate_widths_array(&self) -> Vec<Object> {
        let mut widths = Vec::new();
        let Some(face) = self.face() else {
            return widths;
        };

        let mut gids: Vec<u16> = self
            .used_chars
            .iter()
            .filter_map(|&c| face.glyph_index(c).map(|id| id.0))
            .collect();
        gids.sort_unstable();
        gids.dedup();

        // Individual mapping format: [gid1 [width1] gid2 [width2] ...]
        for gid in gids {
            let advance = face
                .glyph_hor_advance(ttf_parser::GlyphId(gid))
                .unwrap_or(0);
            widths.push(Object::Integer(gid as i64));
            widths.push(Object::Array(vec![Object::Integer(
                self.to_glyph_space(advance as i32) as i64,
            )]));
        }

        widths
    }

    /// Generate ToUnicode CMap stream content
    fn generate_tounicode_cmap(&self) -> String {
        let mut cmap = String::new();

        cmap.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap.push_str("12 dict begin\n");
        cmap.push_str("begincmap\n");
        cmap.push_str("/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
        cmap.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap.push_str("/CMapType 2 def\n");

        cmap.push_str("1 begincodespacerange\n");
        cmap.push_str("<0000> <FFFF>\n");
        cmap.push_str("endcodespacerange\n");

        // used_chars is ordered, so the CMap is deterministic
        let char_list: Vec<char> = self.used_chars.iter().copied().collect();

        // bfchar sections are limited to 100 entries
        for chunk in char_list.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for c in chunk {
                let gid = self.glyph_id(*c).unwrap_or(0);
                let mut utf16 = [0u16; 2];
                let unicode: String = c
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04X}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04X}> <{unicode}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\n");
        cmap.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap.push_str("end\n");
        cmap.push_str("end\n");

        cmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Font data whose bytes are not a parseable face; every metric falls
    /// back to its default.
    fn unparsed_font() -> FontData {
        FontData {
            name: "test".to_string(),
            ttf_data: vec![0u8; 100],
            used_chars: BTreeSet::new(),
        }
    }

    #[test]
    fn test_from_ttf_rejects_garbage() {
        let err = FontData::from_ttf("broken", &[0u8; 100]).unwrap_err();
        assert!(matches!(err, PdfError::FontParseError(_)));
    }

    #[test]
    fn test_builder_requires_regular() {
        let err = FontFamilyBuilder::new().build("serif").unwrap_err();
        assert!(err.to_string().contains("regular variant"));
    }

    #[test]
    fn test_add_chars() {
        let mut font = unparsed_font();
        font.add_chars("Hello");
        assert_eq!(font.used_chars.len(), 4); // H, e, l, o
        assert!(font.used_chars.contains(&'H'));
        assert!(font.used_chars.contains(&'l'));
    }

    #[test]
    fn test_defaults_without_face() {
        let font = unparsed_font();
        assert_eq!(font.units_per_em(), 1000);
        assert_eq!(font.ascender(), 800);
        assert_eq!(font.descender(), -200);
        assert_eq!(font.text_width("Hello"), 0);
        assert_eq!(font.text_width_points("Hello", 12.0), 0.0);
        assert_eq!(font.glyph_id('A'), None);
    }

    #[test]
    fn test_encode_text_hex_no_face() {
        let font = unparsed_font();
        assert_eq!(font.encode_text_hex(""), "<>");
        assert_eq!(font.encode_text_hex("AB"), "<00000000>");
    }

    #[test]
    fn test_to_pdf_objects() {
        let mut font = unparsed_font();
        font.add_chars("Hello");

        let objects = font.to_pdf_objects().expect("Failed to generate PDF objects");

        assert!(!objects.type0_font.is_empty());
        assert!(!objects.cid_font.is_empty());
        assert!(!objects.font_descriptor.is_empty());
        assert_eq!(objects.font_file_stream.content.len(), 100);
        assert!(!objects.tounicode_stream.content.is_empty());
        let cid_to_gid = objects.cid_font.get(b"CIDToGIDMap").unwrap();
        assert_eq!(cid_to_gid.as_name().unwrap(), b"Identity");
    }

    #[test]
    fn test_generate_tounicode_cmap() {
        let mut font = unparsed_font();
        font.add_chars("BA");

        let cmap = font.generate_tounicode_cmap();

        assert!(cmap.contains("begincmap"));
        assert!(cmap.contains("2 beginbfchar"));
        // Without a face, all characters map to GID 0; order follows the char
        let a = cmap.find("<0000> <0041>").unwrap();
        let b = cmap.find("<0000> <0042>").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_tounicode_cmap_empty() {
        let cmap = unparsed_font().generate_tounicode_cmap();
        assert!(cmap.contains("/CIDInit"));
        assert!(cmap.contains("endcmap"));
        assert!(!cmap.contains("beginbfchar"));
    }

    #[test]
    fn test_family_bold_falls_back_to_regular() {
        let mut family = FontFamily {
            regular: unparsed_font(),
            bold: None,
        };
        assert!(!family.has_bold());
        assert_eq!(family.get_variant(FontWeight::Bold).name, "test");
        family.get_variant_mut(FontWeight::Bold).add_chars("x");
        assert!(family.regular.used_chars.contains(&'x'));
    }

    #[test]
    fn test_times_family_measures_by_weight() {
        let times = TimesFamily;
        let regular = times.text_width("Purchase", FontWeight::Regular, 12.0);
        let bold = times.text_width("Purchase", FontWeight::Bold, 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_font_face_delegates() {
        let face = FontFace::default();
        assert_eq!(
            face.text_width("Re:", FontWeight::Regular, 11.0),
            TimesFamily.text_width("Re:", FontWeight::Regular, 11.0)
        );
    }
}
