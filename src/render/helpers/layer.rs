//! Operation builder for printpdf 0.8
//!
//! `LayerBuilder` offers a small drawing API (text, rectangles,
//! polygons, XObjects) and collects the resulting `Op`s for one page.

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon,
    PolygonRing, Pt, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

use super::encoding::page_text;

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Set the fill color
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw a single line of text with its baseline at (x, y)
    ///
    /// The text is transliterated to the single-byte page encoding here, so
    /// callers may pass raw record values.
    pub fn use_text_builtin(
        &mut self,
        text: &str,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let encoded = page_text(text);
        if encoded.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(encoded)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates with a paint mode
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        self.add_polygon(
            &[(x1.0, y1.0), (x2.0, y1.0), (x2.0, y2.0), (x1.0, y2.0)],
            mode,
        );
    }

    /// Add a closed polygon through the given (x, y) points in mm
    pub fn add_polygon(&mut self, points: &[(f32, f32)], mode: PaintMode) {
        let points = points
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point {
                    x: Mm(x).into(),
                    y: Mm(y).into(),
                },
                bezier: false,
            })
            .collect();

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Save graphics state
    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    /// Restore graphics state
    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    /// Place an XObject (SVG/image) with the given transform
    pub fn use_xobject(&mut self, id: XObjectId, transform: XObjectTransform) {
        self.ops.push(Op::UseXobject { id, transform });
    }
}
