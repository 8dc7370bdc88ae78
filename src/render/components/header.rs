//! Institutional page header: crest and centered title block

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::config::Settings;
use crate::render::helpers::colors::{BLACK, WHITE};
use crate::render::helpers::crest::Crest;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::get_builtin_measurer;

use super::form_table::centered_baseline;

/// Space between the header block and the first section, in template pixels
const AFTER_HEADER_PX: f32 = 12.0;

/// Case badge placement, in mm from the top-right page corner
const BADGE_RIGHT_INSET: f32 = 15.5;
const BADGE_TOP_INSET: f32 = 9.7;
const BADGE_FONT_SIZE: f32 = 10.0;
const BADGE_PADDING: f32 = 1.4;
const BADGE_BOX_HEIGHT: f32 = 5.6;

/// One centered title line
struct TitleLine {
    text: &'static str,
    font_size: f32,
    font: BuiltinFont,
    /// Row height in mm
    row_height: f32,
    /// Gap after the row, in template pixels
    gap_after_px: f32,
}

/// Renderer for the crest and the five title lines
pub struct HeaderRenderer<'a> {
    fonts: &'a FontManager,
    crest: &'a Crest,
    settings: &'a Settings,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(fonts: &'a FontManager, crest: &'a Crest, settings: &'a Settings) -> Self {
        Self {
            fonts,
            crest,
            settings,
        }
    }

    fn title_lines(&self) -> [TitleLine; 5] {
        let s = self.settings;
        [
            TitleLine {
                text: "UNIVERSIDAD COLEGIO MAYOR DE CUNDINAMARCA",
                font_size: s.title_font_size,
                font: self.fonts.bold,
                row_height: 5.0,
                gap_after_px: 2.0,
            },
            TitleLine {
                text: "FACULTAD DE DERECHO - CONSULTORIO JURÍDICO",
                font_size: s.subtitle_font_size,
                font: self.fonts.bold,
                row_height: 4.0,
                gap_after_px: 3.0,
            },
            TitleLine {
                text: "Sede Universidad Pública de Kennedy - Tintal",
                font_size: s.small_font_size,
                font: self.fonts.regular,
                row_height: 4.0,
                gap_after_px: 2.0,
            },
            TitleLine {
                text: "Aprobado Acuerdo 10/28/2002 Sala de Gobierno HTSDI de Bogotá",
                font_size: s.footer_font_size,
                font: self.fonts.italic,
                row_height: 3.0,
                gap_after_px: 8.0,
            },
            TitleLine {
                text: "CONTROL OPERATIVO DE CONSULTA JURÍDICA",
                font_size: s.subtitle_font_size,
                font: self.fonts.bold,
                row_height: 4.0,
                gap_after_px: 0.0,
            },
        ]
    }

    /// Render the header with its top-left corner at `origin`
    ///
    /// The crest sits at the left edge and the titles are centered on the
    /// full width. Returns the height used, including the gap before the
    /// first section.
    pub fn render(&self, layer: &mut LayerBuilder, origin: (Mm, Mm), width: f32) -> f32 {
        let (x, y) = (origin.0 .0, origin.1 .0);
        let crest_width = crate::config::defaults::CREST_WIDTH;
        let crest_height = crate::config::defaults::CREST_HEIGHT;

        self.crest
            .draw(layer, self.fonts, (Mm(x), Mm(y)), crest_width, crest_height);

        layer.set_fill_color(Color::Rgb(BLACK));
        let mut current_y = y;
        for line in self.title_lines() {
            let measurer = get_builtin_measurer(line.font);
            let text_width = measurer.measure_width_mm(line.text, line.font_size);
            layer.use_text_builtin(
                line.text,
                line.font_size,
                Mm(x + (width - text_width) / 2.0),
                Mm(centered_baseline(current_y, line.row_height, line.font_size)),
                line.font,
            );
            current_y -= line.row_height + self.settings.px(line.gap_after_px);
        }

        let block_height = (y - current_y).max(crest_height);
        block_height + self.settings.px(AFTER_HEADER_PX)
    }
}

/// Draw the boxed "PDF #<id>" badge in the top-right corner of a page
///
/// Drawn after the page content so the white box stays on top.
pub fn render_case_badge(
    layer: &mut LayerBuilder,
    fonts: &FontManager,
    settings: &Settings,
    case_id: u32,
) {
    let badge = format!("PDF #{}", case_id);
    let text_width = get_builtin_measurer(fonts.bold).measure_width_mm(&badge, BADGE_FONT_SIZE);

    let text_x = settings.page_width - BADGE_RIGHT_INSET - text_width;
    let box_bottom = settings.page_height - BADGE_TOP_INSET - BADGE_PADDING / 2.0;

    layer.set_fill_color(Color::Rgb(WHITE));
    layer.set_outline_color(Color::Rgb(BLACK));
    layer.set_outline_thickness(0.75);
    layer.add_rect(
        Mm(text_x - BADGE_PADDING),
        Mm(box_bottom),
        Mm(text_x + text_width + BADGE_PADDING),
        Mm(box_bottom + BADGE_BOX_HEIGHT),
        PaintMode::FillStroke,
    );

    layer.set_fill_color(Color::Rgb(BLACK));
    layer.use_text_builtin(
        &badge,
        BADGE_FONT_SIZE,
        Mm(text_x),
        Mm(box_bottom + BADGE_PADDING),
        fonts.bold,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{Op, TextItem};

    fn shown_text(layer: &LayerBuilder) -> Vec<String> {
        layer
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::ShowText { items } => Some(
                    items
                        .iter()
                        .filter_map(|item| match item {
                            TextItem::Text(t) => Some(t.clone()),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_header_lines_in_order() {
        let settings = Settings::default();
        let fonts = FontManager::new();
        let crest = Crest::Fallback;
        let mut layer = LayerBuilder::new();

        let height = HeaderRenderer::new(&fonts, &crest, &settings).render(
            &mut layer,
            (Mm(10.0), Mm(271.4)),
            settings.content_width(),
        );

        let text = shown_text(&layer);
        // Fallback crest initials come first
        assert_eq!(text[0], "UCMC");
        assert_eq!(text[1], "UNIVERSIDAD COLEGIO MAYOR DE CUNDINAMARCA");
        assert_eq!(text[5], "CONTROL OPERATIVO DE CONSULTA JUR\u{CD}DICA");
        assert_eq!(text.len(), 6);
        assert!(height >= crate::config::defaults::CREST_HEIGHT);
        assert!(height < 35.0);
    }

    #[test]
    fn test_case_number_badge() {
        let settings = Settings::default();
        let fonts = FontManager::new();
        let mut layer = LayerBuilder::new();

        render_case_badge(&mut layer, &fonts, &settings, 42);

        assert_eq!(shown_text(&layer), vec!["PDF #42".to_string()]);
        // Boxed, in the right half of the page
        let polygons = layer
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::DrawPolygon { .. }))
            .count();
        assert_eq!(polygons, 1);
        let text_width =
            get_builtin_measurer(fonts.bold).measure_width_mm("PDF #42", BADGE_FONT_SIZE);
        assert!(settings.page_width - BADGE_RIGHT_INSET - text_width > settings.page_width / 2.0);
    }
}
