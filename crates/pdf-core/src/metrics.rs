//! Advance widths for the base-14 Times faces
//!
//! Widths are Adobe AFM values in 1/1000 em, indexed by WinAnsiEncoding
//! byte: one table for printable ASCII (0x20..=0x7E) and one for the upper
//! half (0x80..=0xFF, zero at the five unassigned codes). Characters with no
//! WinAnsi byte measure as `?`, which is what gets written for them.

use crate::text::win_ansi_byte;

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    // 0-9
      500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // :    ;    <    =    >    ?    @
      278, 278, 564, 564, 564, 444, 921,
    // A-Z
      722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
      722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    // [    \    ]    ^    _    `
      333, 278, 333, 469, 500, 333,
    // a-z
      444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
      500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    // {    |    }    ~
      480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    // 0-9
      500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    // :    ;    <    =    >    ?    @
      333, 333, 570, 570, 570, 500, 930,
    // A-Z
      722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
      722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    // [    \    ]    ^    _    `
      333, 278, 333, 581, 500, 333,
    // a-z
      500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
      556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    // {    |    }    ~
      394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ROMAN_HIGH_WIDTHS: [u16; 128] = [
    // 0x80  €    -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
           500,   0, 333, 500, 444,1000, 500, 500, 333,1000, 556, 333, 889,   0, 611,   0,
    // 0x90  -    ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
             0, 333, 333, 444, 444, 350, 500,1000, 333, 980, 389, 333, 722,   0, 444, 722,
    // 0xA0 nbsp  ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬   shy   ®    ¯
           250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    // 0xB0  °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
           400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    // 0xC0  À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
           722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    // 0xD0  Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
           722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    // 0xE0  à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
           444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    // 0xF0  ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
           500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

#[rustfmt::skip]
const TIMES_BOLD_HIGH_WIDTHS: [u16; 128] = [
    // 0x80  €    -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
           500,   0, 333, 500, 500,1000, 500, 500, 333,1000, 556, 333,1000,   0, 667,   0,
    // 0x90  -    ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
             0, 333, 333, 500, 500, 350, 500,1000, 333,1000, 389, 333, 722,   0, 444, 722,
    // 0xA0 nbsp  ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬   shy   ®    ¯
           250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
    // 0xB0  °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
           400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
    // 0xC0  À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
           722, 722, 722, 722, 722, 722,1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
    // 0xD0  Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
           722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
    // 0xE0  à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
           500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    // 0xF0  ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
           500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
];

/// One of the standard (non-embedded) PDF fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    TimesRoman,
    TimesBold,
}

impl StandardFont {
    /// PostScript name used for /BaseFont
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    fn tables(&self) -> (&'static [u16; 95], &'static [u16; 128]) {
        match self {
            StandardFont::TimesRoman => (&TIMES_ROMAN_WIDTHS, &TIMES_ROMAN_HIGH_WIDTHS),
            StandardFont::TimesBold => (&TIMES_BOLD_WIDTHS, &TIMES_BOLD_HIGH_WIDTHS),
        }
    }

    /// Advance width of a character in 1/1000 em
    pub fn char_width(&self, c: char) -> u16 {
        let (ascii, high) = self.tables();
        match win_ansi_byte(c) {
            Some(byte @ 0x20..=0x7E) => ascii[(byte - 0x20) as usize],
            Some(byte @ 0x80..=0xFF) => high[(byte - 0x80) as usize],
            // Unencodable characters are written as '?'
            _ => ascii[(b'?' - 0x20) as usize],
        }
    }

    /// Width of `text` in points at `font_size`
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f64 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f64 * font_size as f64 / 1000.0
    }
}
