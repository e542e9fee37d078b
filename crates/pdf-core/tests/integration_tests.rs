//! Integration tests for pdf-core
//!
//! These tests build documents, serialize them, and read them back with lopdf.

use pdf_core::{
    FontFace, FontFamilyBuilder, FontWeight, PdfDocument, PdfError, TextMeasure, TimesFamily,
};
use pretty_assertions::assert_eq;

/// Reload serialized bytes
fn reload(bytes: &[u8]) -> lopdf::Document {
    lopdf::Document::load_mem(bytes).expect("generated PDF should load")
}

/// Decompressed content stream of a page (1-indexed)
fn page_content(doc: &lopdf::Document, page: u32) -> String {
    let pages = doc.get_pages();
    let page_id = pages[&page];
    let content = doc.get_page_content(page_id).expect("page content");
    String::from_utf8_lossy(&content).into_owned()
}

fn page_dict(doc: &lopdf::Document, page: u32) -> lopdf::Dictionary {
    let page_id = doc.get_pages()[&page];
    doc.get_object(page_id)
        .unwrap()
        .as_dict()
        .unwrap()
        .clone()
}

#[test]
fn test_empty_document_serializes() {
    let doc = PdfDocument::new(FontFace::default());
    let bytes = doc.to_bytes().unwrap();

    let loaded = reload(&bytes);
    assert_eq!(loaded.get_pages().len(), 0);
}

#[test]
fn test_page_count_survives_round_trip() {
    let mut doc = PdfDocument::new(FontFace::default());
    for _ in 0..3 {
        doc.add_page(612.0, 792.0);
    }
    assert_eq!(doc.page_count(), 3);

    let loaded = reload(&doc.to_bytes().unwrap());
    assert_eq!(loaded.get_pages().len(), 3);
}

#[test]
fn test_media_box_is_letter() {
    let mut doc = PdfDocument::new(FontFace::default());
    doc.add_page(612.0, 792.0);

    let loaded = reload(&doc.to_bytes().unwrap());
    let dict = page_dict(&loaded, 1);
    let media_box = dict.get(b"MediaBox").unwrap().as_array().unwrap();

    let values: Vec<i64> = media_box.iter().map(|v| v.as_i64().unwrap()).collect();
    assert_eq!(values, vec![0, 0, 612, 792]);
}

#[test]
fn test_text_lands_on_requested_page() {
    let mut doc = PdfDocument::new(FontFace::default());
    let first = doc.add_page(612.0, 792.0);
    let second = doc.add_page(612.0, 792.0);

    doc.insert_text(first, 72.0, 720.0, "First page", FontWeight::Regular, 11.0)
        .unwrap();
    doc.insert_text(second, 72.0, 720.0, "Second page", FontWeight::Bold, 12.0)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());

    let one = page_content(&loaded, 1);
    assert!(one.contains("(First page) Tj"));
    assert!(one.contains("/F1 11 Tf"));
    assert!(!one.contains("Second page"));

    let two = page_content(&loaded, 2);
    assert!(two.contains("(Second page) Tj"));
    assert!(two.contains("/F2 12 Tf"));
}

#[test]
fn test_content_streams_are_flate_compressed() {
    let mut doc = PdfDocument::new(FontFace::default());
    let page = doc.add_page(612.0, 792.0);
    doc.insert_text(page, 72.0, 720.0, "Compressed", FontWeight::Regular, 11.0)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let dict = page_dict(&loaded, 1);
    let contents_id = dict.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = loaded.get_object(contents_id).unwrap().as_stream().unwrap();

    assert_eq!(
        stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
        b"FlateDecode"
    );
}

#[test]
fn test_standard_fonts_are_times() {
    let mut doc = PdfDocument::new(FontFace::Standard(TimesFamily));
    doc.add_page(612.0, 792.0);

    let loaded = reload(&doc.to_bytes().unwrap());
    let fonts = loaded.get_page_fonts(loaded.get_pages()[&1]);

    let regular = fonts.get(b"F1".as_slice()).unwrap();
    let bold = fonts.get(b"F2".as_slice()).unwrap();
    assert_eq!(
        regular.get(b"BaseFont").unwrap().as_name().unwrap(),
        b"Times-Roman"
    );
    assert_eq!(
        bold.get(b"BaseFont").unwrap().as_name().unwrap(),
        b"Times-Bold"
    );
    assert_eq!(
        regular.get(b"Encoding").unwrap().as_name().unwrap(),
        b"WinAnsiEncoding"
    );
}

#[test]
fn test_title_written_to_info() {
    let mut doc = PdfDocument::new(FontFace::default());
    doc.set_title("Letter of Intent");
    doc.add_page(612.0, 792.0);

    let loaded = reload(&doc.to_bytes().unwrap());
    let info_id = loaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = loaded.get_object(info_id).unwrap().as_dict().unwrap();
    assert_eq!(
        info.get(b"Title").unwrap().as_str().unwrap(),
        b"Letter of Intent"
    );
}

#[test]
fn test_invalid_page_error() {
    let mut doc = PdfDocument::new(FontFace::default());
    doc.add_page(612.0, 792.0);

    let result = doc.insert_text(5, 72.0, 720.0, "x", FontWeight::Regular, 11.0);
    match result {
        Err(PdfError::InvalidPage(5, 1)) => {}
        other => panic!("expected InvalidPage, got {other:?}"),
    }
}

#[test]
fn test_save_writes_file() {
    let mut doc = PdfDocument::new(FontFace::default());
    let page = doc.add_page(612.0, 792.0);
    doc.insert_text(page, 72.0, 720.0, "Saved", FontWeight::Regular, 11.0)
        .unwrap();

    let path = std::env::temp_dir().join("pdf_core_save_writes_file.pdf");
    doc.save(&path).unwrap();

    let loaded = lopdf::Document::load(&path).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_measure_matches_face() {
    let face = FontFace::default();
    let doc = PdfDocument::new(face.clone());
    let text = "Purchase Price";
    assert_eq!(
        doc.fonts().text_width(text, FontWeight::Bold, 12.0),
        face.text_width(text, FontWeight::Bold, 12.0)
    );
}

/// A TrueType face installed on the machine, if any
fn system_ttf() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSerif.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\times.ttf",
    ]
    .iter()
    .find_map(|path| std::fs::read(path).ok())
}

#[test]
fn test_embedded_font_round_trip() {
    let Some(ttf) = system_ttf() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };

    let family = FontFamilyBuilder::new().regular(ttf).build("Serif").unwrap();
    let mut doc = PdfDocument::new(FontFace::Embedded(family));
    let page = doc.add_page(612.0, 792.0);
    doc.insert_text(page, 72.0, 720.0, "Purchase Price", FontWeight::Regular, 11.0)
        .unwrap();
    // No bold face: bold text shares the regular resource
    doc.insert_text(page, 72.0, 700.0, "Closing", FontWeight::Bold, 12.0)
        .unwrap();
    assert!(doc.fonts().text_width("Closing", FontWeight::Regular, 12.0) > 0.0);

    let loaded = reload(&doc.to_bytes().unwrap());
    assert_eq!(loaded.get_pages().len(), 1);

    let content = page_content(&loaded, 1);
    assert!(content.contains("/F1 11 Tf"));
    assert!(content.contains("/F1 12 Tf"));
    assert!(!content.contains("/F2"));
    assert!(content.contains("> Tj"));

    let fonts = loaded.get_page_fonts(loaded.get_pages()[&1]);
    let type0 = fonts.get(b"F1".as_slice()).unwrap();
    assert_eq!(type0.get(b"Subtype").unwrap().as_name().unwrap(), b"Type0");
    assert_eq!(
        type0.get(b"Encoding").unwrap().as_name().unwrap(),
        b"Identity-H"
    );

    let descendants = type0.get(b"DescendantFonts").unwrap().as_array().unwrap();
    let cid_id = descendants[0].as_reference().unwrap();
    let cid_font = loaded.get_object(cid_id).unwrap().as_dict().unwrap();
    assert_eq!(
        cid_font.get(b"Subtype").unwrap().as_name().unwrap(),
        b"CIDFontType2"
    );
    assert!(!cid_font.get(b"W").unwrap().as_array().unwrap().is_empty());

    let descriptor_id = cid_font.get(b"FontDescriptor").unwrap().as_reference().unwrap();
    let descriptor = loaded.get_object(descriptor_id).unwrap().as_dict().unwrap();
    let font_file_id = descriptor.get(b"FontFile2").unwrap().as_reference().unwrap();
    assert!(loaded.get_object(font_file_id).unwrap().as_stream().is_ok());

    let tounicode_id = type0.get(b"ToUnicode").unwrap().as_reference().unwrap();
    let tounicode = loaded.get_object(tounicode_id).unwrap().as_stream().unwrap();
    let cmap = String::from_utf8_lossy(&tounicode.content).into_owned();
    assert!(cmap.contains("beginbfchar"));
    // 'P' is among the drawn characters
    assert!(cmap.contains("<0050>"));
}

#[test]
fn test_embedded_font_with_bold_face() {
    let Some(ttf) = system_ttf() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };

    let family = FontFamilyBuilder::new()
        .regular(ttf.clone())
        .bold(ttf)
        .build("Serif")
        .unwrap();
    let mut doc = PdfDocument::new(FontFace::Embedded(family));
    let page = doc.add_page(612.0, 792.0);
    doc.insert_text(page, 72.0, 720.0, "Body", FontWeight::Regular, 11.0)
        .unwrap();
    doc.insert_text(page, 72.0, 700.0, "Heading", FontWeight::Bold, 12.0)
        .unwrap();

    let loaded = reload(&doc.to_bytes().unwrap());
    let fonts = loaded.get_page_fonts(loaded.get_pages()[&1]);
    for resource in [b"F1".as_slice(), b"F2".as_slice()] {
        let font = fonts.get(resource).unwrap();
        assert_eq!(font.get(b"Subtype").unwrap().as_name().unwrap(), b"Type0");
    }
    assert!(page_content(&loaded, 1).contains("/F2 12 Tf"));
}
