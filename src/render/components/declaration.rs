//! Consultant declaration block and page footer
//!
//! The five numbered declarations are fixed institutional text. The box is
//! sized to the wrapped text plus a signature area, so nothing is dropped.

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::render::helpers::colors::BLACK;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::get_builtin_measurer;
use crate::render::helpers::wrap::wrap_words;

use super::form_table::centered_baseline;

pub const DECLARATIONS: [&str; 5] = [
    "Que la información arriba suministrada es cierta, se puede verificar y si es comprobada \
     que falta a la verdad y omití información, acepto el archivo y renuncia del caso por parte \
     del CONSULTORIO JURÍDICO de la UNIVERSIDAD COLEGIO MAYOR DE CUNDINAMARCA.",
    "Que la información personal, que suministre y las que requiera para exposición del caso y \
     la orientación ofrecida se compromete a la UNIVERSIDAD COLEGIO (CONSULTORIO JURÍDICO), ni a \
     ninguno de los profesionales que allí labora a si misma al asesorado del caso.",
    "Autorizo que en caso de no poder dar solución a mi problema en el tiempo prudencial o me \
     incurran en ser la misma a diez cietas, o comete alguna falta de personal que me atiende \
     será ARCHIVADO.",
    "Igualmente autorizo a la UNIVERSIDAD COLEGIO MAYOR DE CUNDINAMARCA (CONSULTORIO JURÍDICO), \
     para utilizar la información confidencial suministrada y requerida, con académicos e \
     investigativos.",
    "Manifiesto que mi vinculación al el CONSULTORIO JURÍDICO de la UNIVERSIDAD COLEGIO MAYOR DE \
     CUNDINAMARCA de la existencia de un equipo interdisciplinario que permite dar atención \
     integral a los usuarios y con el fin de mejorar la calidad de vida de nivel individual y/o \
     familiar incluyendo en seguimiento de los casos requeridos.",
];

/// Contact line printed at the bottom of the declaration page
pub const FOOTER_TEXT: &str = "Calle 6C No. 94I - 25 Edificio Nuevo Piso 4 - UPK   Bogotá, D.C.    \
                               Correo: consultoriojuridico.kennedy@unicolmayor.edu.co";

/// Border thickness in points
const BORDER_THICKNESS: f32 = 0.75;

/// Distance between wrapped lines in mm
const LINE_HEIGHT: f32 = 5.0;

/// Extra space after each declaration
const PARAGRAPH_GAP: f32 = 8.0;

/// Space between the box top and the first line
const TOP_PADDING: f32 = 5.0;

/// Space below the last declaration holding the signature
const SIGNATURE_AREA: f32 = 30.0;

/// Indent of the declaration body after its number
const BODY_INDENT: f32 = 6.0;

/// Width reserved for the signature rule and label
const SIGNATURE_WIDTH: f32 = 50.0;

const SIGNATURE_RULE: &str = "____________________";
const SIGNATURE_LABEL: &str = "Firma del Usuario";

/// Renderer for the declaration box
pub struct DeclarationRenderer {
    font: BuiltinFont,
    bold_font: BuiltinFont,
    font_size: f32,
    wrap_chars: usize,
}

impl DeclarationRenderer {
    pub fn new(fonts: &FontManager, font_size: f32, wrap_chars: usize) -> Self {
        Self {
            font: fonts.regular,
            bold_font: fonts.bold,
            font_size,
            wrap_chars,
        }
    }

    fn wrapped(&self) -> Vec<Vec<String>> {
        DECLARATIONS
            .iter()
            .map(|text| wrap_words(text, self.wrap_chars))
            .collect()
    }

    /// Height of the box needed to hold every declaration and the signature
    pub fn box_height(&self) -> f32 {
        let text_height: f32 = self
            .wrapped()
            .iter()
            .map(|lines| lines.len() as f32 * LINE_HEIGHT + PARAGRAPH_GAP)
            .sum();
        TOP_PADDING + text_height + SIGNATURE_AREA
    }

    /// Render the declaration box with its top-left corner at `origin`
    ///
    /// Returns the height used
    pub fn render(&self, layer: &mut LayerBuilder, origin: (Mm, Mm), width: f32) -> f32 {
        let (x, y) = (origin.0 .0, origin.1 .0);
        let height = self.box_height();
        let bottom = y - height;

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(BORDER_THICKNESS);
        layer.add_rect(Mm(x), Mm(bottom), Mm(x + width), Mm(y), PaintMode::Stroke);

        layer.set_fill_color(Color::Rgb(BLACK));
        let mut row_top = y - TOP_PADDING;
        for (i, lines) in self.wrapped().iter().enumerate() {
            let number = format!("{}.", i + 1);
            layer.use_text_builtin(
                &number,
                self.font_size,
                Mm(x + 1.0),
                Mm(centered_baseline(row_top, LINE_HEIGHT, self.font_size)),
                self.bold_font,
            );

            for line in lines {
                layer.use_text_builtin(
                    line,
                    self.font_size,
                    Mm(x + BODY_INDENT),
                    Mm(centered_baseline(row_top, LINE_HEIGHT, self.font_size)),
                    self.font,
                );
                row_top -= LINE_HEIGHT;
            }
            row_top -= PARAGRAPH_GAP;
        }

        // Signature rule with its label below, near the bottom-right corner
        let sig_x = x + width - SIGNATURE_WIDTH;
        let rule_top = bottom + 15.0;
        layer.use_text_builtin(
            SIGNATURE_RULE,
            self.font_size,
            Mm(sig_x),
            Mm(centered_baseline(rule_top, LINE_HEIGHT, self.font_size)),
            self.font,
        );
        layer.use_text_builtin(
            SIGNATURE_LABEL,
            self.font_size,
            Mm(sig_x),
            Mm(centered_baseline(rule_top - 6.0, LINE_HEIGHT, self.font_size)),
            self.font,
        );

        height
    }
}

/// Render the centered contact footer in a 5 mm row starting at `origin`
pub fn render_footer(
    layer: &mut LayerBuilder,
    font: BuiltinFont,
    font_size: f32,
    origin: (Mm, Mm),
    width: f32,
) {
    let (x, y) = (origin.0 .0, origin.1 .0);
    let measurer = get_builtin_measurer(font);
    let text_width = measurer.measure_width_mm(FOOTER_TEXT, font_size);

    layer.set_fill_color(Color::Rgb(BLACK));
    layer.use_text_builtin(
        FOOTER_TEXT,
        font_size,
        Mm(x + (width - text_width) / 2.0),
        Mm(centered_baseline(y, 5.0, font_size)),
        font,
    );
}
