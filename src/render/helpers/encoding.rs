//! Single-byte text encoding for the builtin PDF fonts
//!
//! The builtin Helvetica family only covers a Western single-byte character
//! set, so every string is transliterated before it reaches a page.

/// Empty checkbox glyph used while composing form rows
pub const CHECKBOX_EMPTY: char = '\u{2610}';

/// Checked checkbox glyph used while composing form rows
pub const CHECKBOX_CHECKED: char = '\u{2611}';

/// Placeholder byte for characters with no single-byte mapping
pub const PLACEHOLDER: u8 = b'?';

/// Transliterate arbitrary text to single-byte Western encoding
///
/// Accented Spanish vowels, ñ/Ñ and ü/Ü map to their Latin-1 bytes, the
/// checkbox glyphs become `[ ]` and `[x]`, ASCII passes through, and any
/// other code point becomes `?`.
pub fn transliterate(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());

    for c in text.chars() {
        match c {
            'á' => out.push(0xE1),
            'é' => out.push(0xE9),
            'í' => out.push(0xED),
            'ó' => out.push(0xF3),
            'ú' => out.push(0xFA),
            'Á' => out.push(0xC1),
            'É' => out.push(0xC9),
            'Í' => out.push(0xCD),
            'Ó' => out.push(0xD3),
            'Ú' => out.push(0xDA),
            'ñ' => out.push(0xF1),
            'Ñ' => out.push(0xD1),
            'ü' => out.push(0xFC),
            'Ü' => out.push(0xDC),
            CHECKBOX_EMPTY => out.extend_from_slice(b"[ ]"),
            // ☒ (ballot box with X) is treated as checked too
            CHECKBOX_CHECKED | '\u{2612}' => out.extend_from_slice(b"[x]"),
            c if c.is_ascii() => out.push(c as u8),
            _ => out.push(PLACEHOLDER),
        }
    }

    out
}

/// Transliterate text and re-express each output byte as one `char`
///
/// The result only contains code points U+0000..=U+00FF, one per encoded
/// byte, which is what the page operations expect for builtin fonts.
pub fn page_text(text: &str) -> String {
    transliterate(text).into_iter().map(char::from).collect()
}

/// A checkbox glyph for a boolean state
pub fn checkbox(checked: bool) -> char {
    if checked {
        CHECKBOX_CHECKED
    } else {
        CHECKBOX_EMPTY
    }
}
