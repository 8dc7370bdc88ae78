//! Bordered form rows
//!
//! Renders the gray section header bars and the rows of bordered cells used
//! by sections I and II. Cell widths are fractions of the table width.

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::config::Settings;
use crate::render::helpers::colors::{BLACK, HEADER_GRAY};
use crate::render::helpers::encoding::page_text;
use crate::render::helpers::fonts::FontManager;
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::get_builtin_measurer;
use crate::render::helpers::wrap::ELLIPSIS;

/// Border thickness in points
const BORDER_THICKNESS: f32 = 0.5;

/// Horizontal text inset inside a cell
const CELL_PADDING: f32 = 1.0;

/// Baseline for single-line text vertically centered in a row
///
/// `row_top` is the top edge of the row in PDF coordinates.
pub fn centered_baseline(row_top: f32, row_height: f32, font_size: f32) -> f32 {
    row_top - row_height + (row_height - font_size * 0.35) / 2.0
}

/// Encode `text` and shorten it with an ellipsis until it is at most `available` mm wide
pub fn fit_width(text: &str, font: BuiltinFont, font_size: f32, available: f32) -> String {
    let measurer = get_builtin_measurer(font);
    let encoded = page_text(text);
    if measurer.measure_width_mm(&encoded, font_size) <= available {
        return encoded;
    }

    let mut chars: Vec<char> = encoded.chars().collect();
    while chars.pop().is_some() {
        let candidate: String = chars.iter().collect::<String>() + ELLIPSIS;
        if measurer.measure_width_mm(&candidate, font_size) <= available {
            return candidate;
        }
    }
    String::new()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One cell of a form row
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    /// Share of the table width, 0.0..=1.0
    pub fraction: f32,
    pub align: Align,
}

impl Cell {
    pub fn left(text: impl Into<String>, fraction: f32) -> Self {
        Self {
            text: text.into(),
            fraction,
            align: Align::Left,
        }
    }

    pub fn center(text: impl Into<String>, fraction: f32) -> Self {
        Self {
            text: text.into(),
            fraction,
            align: Align::Center,
        }
    }

    /// A left-aligned cell spanning the whole row
    pub fn full(text: impl Into<String>) -> Self {
        Self::left(text, 1.0)
    }
}

/// Renderer for section headers and bordered cell rows
pub struct FormTableRenderer {
    font: BuiltinFont,
    bold_font: BuiltinFont,
    /// Table width in mm
    width: f32,
    /// Section header height in mm
    header_height: f32,
    /// Cell row height in mm
    row_height: f32,
    header_font_size: f32,
    cell_font_size: f32,
}

impl FormTableRenderer {
    pub fn new(fonts: &FontManager, settings: &Settings) -> Self {
        Self {
            font: fonts.regular,
            bold_font: fonts.bold,
            width: settings.content_width(),
            header_height: settings.header_row_height(),
            row_height: settings.cell_height(),
            header_font_size: settings.body_font_size,
            cell_font_size: settings.small_font_size,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Render a gray section header bar with a bold left-aligned title
    ///
    /// Returns the height used
    pub fn render_section_header(
        &self,
        layer: &mut LayerBuilder,
        origin: (Mm, Mm),
        title: &str,
    ) -> f32 {
        let (x, y) = (origin.0 .0, origin.1 .0);

        layer.set_fill_color(Color::Rgb(HEADER_GRAY));
        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(BORDER_THICKNESS);
        layer.add_rect(
            Mm(x),
            Mm(y - self.header_height),
            Mm(x + self.width),
            Mm(y),
            PaintMode::FillStroke,
        );

        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text_builtin(
            title,
            self.header_font_size,
            Mm(x + CELL_PADDING),
            Mm(centered_baseline(y, self.header_height, self.header_font_size)),
            self.bold_font,
        );

        self.header_height
    }

    /// Render one row of bordered cells
    ///
    /// Returns the height used
    pub fn render_row(&self, layer: &mut LayerBuilder, origin: (Mm, Mm), cells: &[Cell]) -> f32 {
        let (x, y) = (origin.0 .0, origin.1 .0);
        let bottom = y - self.row_height;
        let baseline = centered_baseline(y, self.row_height, self.cell_font_size);
        let measurer = get_builtin_measurer(self.font);

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(BORDER_THICKNESS);

        let mut used = 0.0;
        for (i, cell) in cells.iter().enumerate() {
            let cell_x = x + used * self.width;
            used += cell.fraction;
            // Snap the last cell to the table edge
            let cell_right = if i + 1 == cells.len() {
                x + self.width
            } else {
                x + used * self.width
            };

            layer.add_rect(
                Mm(cell_x),
                Mm(bottom),
                Mm(cell_right),
                Mm(y),
                PaintMode::Stroke,
            );

            if cell.text.is_empty() {
                continue;
            }

            let available = cell_right - cell_x - 2.0 * CELL_PADDING;
            let text = fit_width(&cell.text, self.font, self.cell_font_size, available);
            if text.chars().count() < page_text(&cell.text).chars().count() {
                log::debug!("Cell text clipped to {:.1} mm: {:?}", available, cell.text);
            }

            let text_x = match cell.align {
                Align::Left => cell_x + CELL_PADDING,
                Align::Center => {
                    let text_width = measurer.measure_width_mm(&text, self.cell_font_size);
                    cell_x + (cell_right - cell_x - text_width) / 2.0
                }
            };

            layer.set_fill_color(Color::Rgb(BLACK));
            layer.use_text_builtin(
                &text,
                self.cell_font_size,
                Mm(text_x),
                Mm(baseline),
                self.font,
            );
        }

        self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{Op, TextItem};

    fn renderer() -> FormTableRenderer {
        FormTableRenderer::new(&FontManager::new(), &Settings::default())
    }

    fn count_text_ops(layer: &LayerBuilder) -> usize {
        layer
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::ShowText { .. }))
            .count()
    }

    fn count_polygons(layer: &LayerBuilder) -> usize {
        layer
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::DrawPolygon { .. }))
            .count()
    }

    #[test]
    fn test_row_draws_every_cell_border() {
        let table = renderer();
        let mut layer = LayerBuilder::new();
        let cells = [
            Cell::left("Ciudad: Bogotá D.C.", 0.55),
            Cell::center("Día", 0.10),
            Cell::center("Mes", 0.10),
            Cell::center("Año", 0.15),
            Cell::center("", 0.10),
        ];
        let height = table.render_row(&mut layer, (Mm(10.0), Mm(250.0)), &cells);

        assert!((height - table.row_height()).abs() < 1e-6);
        assert_eq!(count_polygons(&layer), 5);
        // Empty cell gets a border but no text
        assert_eq!(count_text_ops(&layer), 4);
    }

    #[test]
    fn test_section_header_height() {
        let table = renderer();
        let mut layer = LayerBuilder::new();
        let height = table.render_section_header(
            &mut layer,
            (Mm(10.0), Mm(250.0)),
            "I. DATOS DEL USUARIO",
        );
        assert!((height - Settings::default().header_row_height()).abs() < 1e-6);
        assert_eq!(count_text_ops(&layer), 1);
    }

    #[test]
    fn test_wide_text_is_clipped_to_cell() {
        let table = renderer();
        let mut layer = LayerBuilder::new();
        let cells = [
            Cell::left(format!("Remitido por: {}", "W".repeat(300)), 0.50),
            Cell::left("@".repeat(300), 0.50),
        ];
        table.render_row(&mut layer, (Mm(10.0), Mm(250.0)), &cells);

        let measurer = get_builtin_measurer(BuiltinFont::Helvetica);
        let half = Settings::default().content_width() / 2.0 - 2.0 * CELL_PADDING;
        let shown: Vec<String> = layer
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::ShowText { items } => Some(
                    items
                        .iter()
                        .map(|item| match item {
                            TextItem::Text(t) => t.clone(),
                            _ => String::new(),
                        })
                        .collect(),
                ),
                _ => None,
            })
            .collect();

        assert_eq!(shown.len(), 2);
        for text in &shown {
            assert!(text.ends_with(ELLIPSIS));
            assert!(measurer.measure_width_mm(text, 9.0) <= half + 1e-3);
        }
        assert!(shown[0].starts_with("Remitido por: W"));
    }

    #[test]
    fn test_fit_width_keeps_short_text() {
        assert_eq!(fit_width("Estrato: 2", BuiltinFont::Helvetica, 9.0, 50.0), "Estrato: 2");
        assert_eq!(
            fit_width("Área", BuiltinFont::Helvetica, 9.0, 50.0),
            "\u{C1}rea"
        );
        assert_eq!(fit_width("Dirección", BuiltinFont::Helvetica, 9.0, 0.5), "");
    }

    #[test]
    fn test_centered_baseline_inside_row() {
        let baseline = centered_baseline(100.0, 5.3, 9.0);
        assert!(baseline < 100.0 && baseline > 100.0 - 5.3);
    }
}
