//! Text measurement for the builtin Helvetica family
//!
//! Used to center and right-align single lines. Widths come from Adobe's AFM
//! files (1000 units per em).

use printpdf::BuiltinFont;

/// Text measurer for PDF builtin fonts
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    fn widths(&self) -> &'static [u16; 128] {
        match self.font {
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
            _ => &HELVETICA_WIDTHS,
        }
    }

    /// Get character width in 1000 units per em
    ///
    /// Accented Latin-1 letters use the width of their base letter.
    fn char_width(&self, c: char) -> u16 {
        let c = base_letter(c);
        if !c.is_ascii() {
            return 556;
        }
        self.widths()[c as usize]
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * 0.3528
    }

    /// Get cap height in mm for the font at given size
    pub fn cap_height_mm(&self, font_size: f32) -> f32 {
        (718.0 / 1000.0) * font_size * 0.3528
    }
}

/// Map page-encoded accented letters to their unaccented ASCII base
fn base_letter(c: char) -> char {
    match c {
        '\u{E1}' => 'a',
        '\u{E9}' => 'e',
        '\u{ED}' => 'i',
        '\u{F3}' => 'o',
        '\u{FA}' | '\u{FC}' => 'u',
        '\u{F1}' => 'n',
        '\u{C1}' => 'A',
        '\u{C9}' => 'E',
        '\u{CD}' => 'I',
        '\u{D3}' => 'O',
        '\u{DA}' | '\u{DC}' => 'U',
        '\u{D1}' => 'N',
        other => other,
    }
}

/// Get the measurer for a builtin font
pub fn get_builtin_measurer(font: BuiltinFont) -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static REGULAR: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    static BOLD: OnceLock<BuiltinFontMeasurer> = OnceLock::new();

    match font {
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
            BOLD.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
        }
        _ => REGULAR.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica)),
    }
}

/// Helvetica character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];
