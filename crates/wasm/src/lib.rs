//! WASM bindings for loi-pdf
//!
//! This crate provides JavaScript-friendly API for:
//! - Generating Letter of Intent PDFs from form data
//! - Checking which required form fields are still missing
//! - Loading custom TrueType fonts for rendering
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { generateLoiPdf, loiFilename, LoiGenerator } from 'loi-wasm';
//!
//! await init();
//!
//! const data = { date: "2024-01-15", sellerName: "John Doe", buyerName: "XYZ LLC" };
//!
//! // Times Roman / Times Bold
//! const bytes = generateLoiPdf(data);
//!
//! // Or with embedded fonts
//! const generator = new LoiGenerator();
//! generator.loadFonts(regularBytes, boldBytes);
//! const custom = generator.render(data);
//!
//! download(new Blob([bytes], { type: "application/pdf" }), loiFilename(data));
//! ```

use pdf_core::{FontFamily, FontFamilyBuilder};
use template::FieldValues;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Read form data from a plain JS object
fn fields_from_js(data: JsValue) -> Result<FieldValues, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    FieldValues::from_json_value(&value).map_err(to_js_error)
}

fn family_from_bytes(regular: &[u8], bold: Option<Vec<u8>>) -> pdf_core::Result<FontFamily> {
    let mut builder = FontFamilyBuilder::new().regular(regular.to_vec());
    if let Some(bold) = bold {
        builder = builder.bold(bold);
    }
    builder.build("LoiFont")
}

/// Generate a Letter of Intent with Times Roman / Times Bold
///
/// @param data - Form data object (camelCase field names)
/// @returns PDF bytes (Uint8Array)
#[wasm_bindgen(js_name = generateLoiPdf)]
pub fn generate_loi_pdf(data: JsValue) -> Result<Vec<u8>, JsValue> {
    let fields = fields_from_js(data)?;
    template::generate_loi_pdf(&fields).map_err(to_js_error)
}

/// Download filename for the given form data
///
/// @param data - Form data object
/// @returns e.g. "Letter_of_Intent_2024_01_15.pdf"
#[wasm_bindgen(js_name = loiFilename)]
pub fn loi_filename(data: JsValue) -> Result<String, JsValue> {
    let fields = fields_from_js(data)?;
    Ok(template::loi_filename(&fields))
}

/// Names of required fields that are blank or absent
///
/// @param data - Form data object
/// @returns Array of field names
#[wasm_bindgen(js_name = missingRequiredFields)]
pub fn missing_required_fields(data: JsValue) -> Result<js_sys::Array, JsValue> {
    let fields = fields_from_js(data)?;
    Ok(template::missing_required(&fields)
        .into_iter()
        .map(|name| JsValue::from_str(name.as_str()))
        .collect())
}

/// Letter of Intent generator with configurable fonts and page geometry
#[wasm_bindgen]
pub struct LoiGenerator {
    inner: template::LoiGenerator,
    embedded: bool,
}

#[wasm_bindgen]
impl LoiGenerator {
    /// Create a generator using US Letter and the standard Times fonts
    #[wasm_bindgen(constructor)]
    pub fn new() -> LoiGenerator {
        LoiGenerator {
            inner: template::LoiGenerator::new(),
            embedded: false,
        }
    }

    /// Load TrueType fonts
    ///
    /// @param regular - Regular TTF bytes (Uint8Array)
    /// @param bold - Optional bold TTF bytes; regular is used when omitted
    #[wasm_bindgen(js_name = loadFonts)]
    pub fn load_fonts(&mut self, regular: &[u8], bold: Option<Vec<u8>>) -> Result<(), JsValue> {
        let family = family_from_bytes(regular, bold).map_err(to_js_error)?;
        self.inner = self.inner.clone().with_font_family(family);
        self.embedded = true;
        Ok(())
    }

    /// Override page geometry
    ///
    /// @param config - `{ pageWidth, pageHeight, margin, lineHeightFactor }`, all optional
    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: layout::LayoutConfig = serde_wasm_bindgen::from_value(config)?;
        self.inner = self.inner.clone().with_config(config);
        Ok(())
    }

    /// Whether custom fonts have been loaded
    #[wasm_bindgen(getter, js_name = hasEmbeddedFonts)]
    pub fn has_embedded_fonts(&self) -> bool {
        self.embedded
    }

    /// Render PDF with form data
    ///
    /// @param data - Form data object
    /// @returns PDF bytes (Uint8Array)
    pub fn render(&self, data: JsValue) -> Result<Vec<u8>, JsValue> {
        let fields = fields_from_js(data)?;
        self.inner.generate(&fields).map_err(to_js_error)
    }

    /// Number of pages the form data lays out to
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self, data: JsValue) -> Result<usize, JsValue> {
        let fields = fields_from_js(data)?;
        Ok(self.inner.layout(&fields).len())
    }
}

impl Default for LoiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_new_generator_uses_standard_fonts() {
        assert!(!LoiGenerator::new().has_embedded_fonts());
    }

    #[wasm_bindgen_test]
    fn test_family_from_invalid_bytes() {
        assert!(family_from_bytes(b"not a font", None).is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn sample() -> JsValue {
        js_sys::JSON::parse(
            r#"{
                "date": "2024-01-15",
                "sellerName": "John Doe",
                "buyerName": "XYZ LLC",
                "propertyAddress": "123 Main St",
                "purchasePrice": "500,000"
            }"#,
        )
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_generate_loi_pdf() {
        let bytes = generate_loi_pdf(sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_loi_filename() {
        assert_eq!(
            loi_filename(sample()).unwrap(),
            "Letter_of_Intent_2024_01_15.pdf"
        );
    }

    #[wasm_bindgen_test]
    fn test_missing_required_fields() {
        let missing = missing_required_fields(sample()).unwrap();
        assert_eq!(missing.length(), 0);

        let empty = js_sys::JSON::parse("{}").unwrap();
        assert_eq!(missing_required_fields(empty).unwrap().length(), 5);
    }

    #[wasm_bindgen_test]
    fn test_load_fonts_rejects_garbage() {
        let mut generator = LoiGenerator::new();
        assert!(generator.load_fonts(b"garbage", None).is_err());
        assert!(!generator.has_embedded_fonts());
    }
}
