//! Fixed-height narrative box
//!
//! Wraps free text into a bordered box of fixed height. Lines that do not
//! fit are dropped; the box never grows. An optional signature label and
//! rule sit in the bottom-right corner.

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::render::helpers::colors::BLACK;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::wrap::{fit_lines, wrap_words};

use super::form_table::centered_baseline;

/// Border thickness in points
const BORDER_THICKNESS: f32 = 0.75;

/// Inner padding from the box border to the text
const PADDING: f32 = 3.0;

/// Distance between consecutive text lines in mm
const LINE_HEIGHT: f32 = 4.0;

/// Space kept free at the bottom of a plain box
const PLAIN_RESERVE: f32 = 6.0;

/// Space kept free at the bottom of a box with a signature
const SIGNATURE_RESERVE: f32 = 16.0;

/// Signature rule printed under the label
const SIGNATURE_RULE: &str = "________________";

/// A signature placeholder in the bottom-right corner
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub label: &'static str,
    /// Distance from the box's right edge to the label's left edge, in mm
    pub inset: f32,
}

/// Renderer for bordered wrapped-text boxes
pub struct TextBoxRenderer {
    font: BuiltinFont,
    font_size: f32,
    wrap_chars: usize,
    signature: Option<Signature>,
}

impl TextBoxRenderer {
    pub fn new(font: BuiltinFont, font_size: f32, wrap_chars: usize) -> Self {
        Self {
            font,
            font_size,
            wrap_chars,
            signature: None,
        }
    }

    /// Add a signature placeholder (also reserves room for it)
    pub fn signature(mut self, label: &'static str, inset: f32) -> Self {
        self.signature = Some(Signature { label, inset });
        self
    }

    /// Number of text lines a box of the given height can hold
    pub fn capacity(&self, height: f32) -> usize {
        let reserve = if self.signature.is_some() {
            SIGNATURE_RESERVE
        } else {
            PLAIN_RESERVE
        };
        ((height - reserve) / LINE_HEIGHT).floor().max(0.0) as usize
    }

    /// Render the box with its top-left corner at `origin`
    ///
    /// Returns the height used, which is always `height`
    pub fn render(
        &self,
        layer: &mut LayerBuilder,
        origin: (Mm, Mm),
        width: f32,
        height: f32,
        text: &str,
    ) -> f32 {
        let (x, y) = (origin.0 .0, origin.1 .0);
        let bottom = y - height;

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(BORDER_THICKNESS);
        layer.add_rect(Mm(x), Mm(bottom), Mm(x + width), Mm(y), PaintMode::Stroke);

        let wrapped = wrap_words(text, self.wrap_chars);
        let total = wrapped.len();
        let (lines, dropped) = fit_lines(wrapped, self.capacity(height));
        if dropped > 0 {
            log::debug!(
                "Text box overflow: kept {} of {} lines, {} dropped",
                lines.len(),
                total,
                dropped
            );
        }

        layer.set_fill_color(Color::Rgb(BLACK));
        for (i, line) in lines.iter().enumerate() {
            let row_top = y - PADDING - i as f32 * LINE_HEIGHT;
            layer.use_text_builtin(
                line,
                self.font_size,
                Mm(x + PADDING),
                Mm(centered_baseline(row_top, LINE_HEIGHT, self.font_size)),
                self.font,
            );
        }

        if let Some(signature) = self.signature {
            let sig_x = x + width - signature.inset;
            let rule_top = bottom + 6.0;
            let label_top = rule_top + 3.0;

            layer.use_text_builtin(
                signature.label,
                self.font_size,
                Mm(sig_x),
                Mm(centered_baseline(label_top, 3.0, self.font_size)),
                self.font,
            );
            layer.use_text_builtin(
                SIGNATURE_RULE,
                self.font_size,
                Mm(sig_x),
                Mm(centered_baseline(rule_top, 3.0, self.font_size)),
                self.font,
            );
        }

        height
    }
}
