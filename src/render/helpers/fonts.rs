use printpdf::BuiltinFont;

/// Font set for the form
///
/// The form is set entirely in the builtin Helvetica family (the
/// template's "Arial"), so nothing has to be embedded and text stays in
/// the single-byte encoding produced by `encoding::page_text`.
#[derive(Debug, Clone, Copy)]
pub struct FontManager {
    pub regular: BuiltinFont,
    pub bold: BuiltinFont,
    pub italic: BuiltinFont,
}

impl Default for FontManager {
    fn default() -> Self {
        Self {
            regular: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            italic: BuiltinFont::HelveticaOblique,
        }
    }
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }
}
