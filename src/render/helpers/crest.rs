//! Institutional crest
//!
//! The crest image comes from an [`AssetResolver`]. It is registered once per
//! document under a fixed XObject name so repeated renders produce the same
//! bytes. When no asset is available (or it cannot be decoded) a simple
//! shield is drawn with vector operations instead.

use std::path::PathBuf;

use printpdf::{
    Color, Mm, PaintMode, PdfDocument, PdfWarnMsg, Pt, RawImage, Svg, XObject, XObjectId,
    XObjectTransform,
};

use super::colors::{BLACK, CREST_BLUE, CREST_GOLD, WHITE};
use super::fonts::FontManager;
use super::layer::LayerBuilder;
use super::text_metrics::get_builtin_measurer;

/// XObject name the crest is registered under
pub const CREST_XOBJECT_ID: &str = "Crest";

/// DPI used when placing crest XObjects
const CREST_DPI: f32 = 300.0;

/// Raw crest data as found by a resolver
#[derive(Debug, Clone, PartialEq)]
pub enum CrestSource {
    Svg(String),
    Raster(Vec<u8>),
}

/// Locates static assets needed by the report
pub trait AssetResolver: Send + Sync {
    /// The crest image, or `None` to use the drawn fallback
    fn crest(&self) -> Option<CrestSource>;
}

/// Resolves the crest from a list of candidate files; the first existing one wins
#[derive(Debug, Clone, Default)]
pub struct FileAssetResolver {
    candidates: Vec<PathBuf>,
}

impl FileAssetResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }
}

impl AssetResolver for FileAssetResolver {
    fn crest(&self) -> Option<CrestSource> {
        let path = self.candidates.iter().find(|p| p.is_file())?;
        log::debug!("Crest found at {}", path.display());

        let is_svg = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        let loaded = if is_svg {
            std::fs::read_to_string(path).map(CrestSource::Svg)
        } else {
            std::fs::read(path).map(CrestSource::Raster)
        };

        match loaded {
            Ok(source) => Some(source),
            Err(e) => {
                log::warn!("Could not read crest {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Serves a crest held in memory (or none at all)
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    crest: Option<CrestSource>,
}

impl StaticAssetResolver {
    /// A resolver that never finds a crest, forcing the drawn fallback
    pub fn none() -> Self {
        Self { crest: None }
    }

    pub fn svg(content: impl Into<String>) -> Self {
        Self {
            crest: Some(CrestSource::Svg(content.into())),
        }
    }

    pub fn raster(bytes: Vec<u8>) -> Self {
        Self {
            crest: Some(CrestSource::Raster(bytes)),
        }
    }
}

impl AssetResolver for StaticAssetResolver {
    fn crest(&self) -> Option<CrestSource> {
        self.crest.clone()
    }
}

/// The crest as placed in one document
#[derive(Debug, Clone)]
pub enum Crest {
    /// An embedded XObject with its intrinsic size in pixels
    Embedded {
        id: XObjectId,
        width_px: f32,
        height_px: f32,
    },
    Fallback,
}

impl Crest {
    /// Resolve the crest and register it in the document
    pub fn load(doc: &mut PdfDocument, resolver: &dyn AssetResolver) -> Self {
        let Some(source) = resolver.crest() else {
            log::info!("No crest asset found, drawing fallback shield");
            return Crest::Fallback;
        };

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let id = XObjectId(CREST_XOBJECT_ID.to_string());

        let decoded = match source {
            CrestSource::Svg(content) => Svg::parse(&content, &mut warnings).map(|svg| {
                let width = svg.width.map(|px| px.0 as f32);
                let height = svg.height.map(|px| px.0 as f32);
                (XObject::External(svg), width, height)
            }),
            CrestSource::Raster(bytes) => {
                RawImage::decode_from_bytes(&bytes, &mut warnings).map(|image| {
                    let width = Some(image.width as f32);
                    let height = Some(image.height as f32);
                    (XObject::Image(image), width, height)
                })
            }
        };

        match decoded {
            Ok((xobject, Some(width_px), Some(height_px)))
                if width_px > 0.0 && height_px > 0.0 =>
            {
                doc.resources.xobjects.map.insert(id.clone(), xobject);
                Crest::Embedded {
                    id,
                    width_px,
                    height_px,
                }
            }
            Ok(_) => {
                log::warn!("Crest asset has no usable size, drawing fallback shield");
                Crest::Fallback
            }
            Err(e) => {
                log::warn!("Could not decode crest asset ({}), drawing fallback shield", e);
                Crest::Fallback
            }
        }
    }

    /// Draw the crest inside the box whose top-left corner is `origin`
    ///
    /// The image keeps its aspect ratio and is centered in the box.
    pub fn draw(
        &self,
        layer: &mut LayerBuilder,
        fonts: &FontManager,
        origin: (Mm, Mm),
        width: f32,
        height: f32,
    ) {
        let (x, top) = (origin.0 .0, origin.1 .0);

        match self {
            Crest::Embedded {
                id,
                width_px,
                height_px,
            } => {
                // Natural size at the placement DPI
                let natural_w = width_px * 25.4 / CREST_DPI;
                let natural_h = height_px * 25.4 / CREST_DPI;
                let scale = (width / natural_w).min(height / natural_h);

                let left = x + (width - natural_w * scale) / 2.0;
                let bottom = top - (height + natural_h * scale) / 2.0;

                // Convert mm to points (1 mm = 2.834645669 pt)
                let mm_to_pt = 2.834_645_7;
                layer.use_xobject(
                    id.clone(),
                    XObjectTransform {
                        translate_x: Some(Pt(left * mm_to_pt)),
                        translate_y: Some(Pt(bottom * mm_to_pt)),
                        scale_x: Some(scale),
                        scale_y: Some(scale),
                        rotate: None,
                        dpi: Some(CREST_DPI),
                    },
                );
            }
            Crest::Fallback => draw_fallback(layer, fonts, x, top, width, height),
        }
    }
}

/// Blue shield with a gold cross, a white band and the "UCMC" initials
fn draw_fallback(layer: &mut LayerBuilder, fonts: &FontManager, x: f32, top: f32, w: f32, h: f32) {
    layer.save_graphics_state();

    layer.set_fill_color(Color::Rgb(CREST_BLUE));
    layer.set_outline_color(Color::Rgb(BLACK));
    layer.set_outline_thickness(0.8);
    layer.add_polygon(
        &[
            (x + w / 2.0, top),
            (x + w * 0.85, top - h * 0.12),
            (x + w * 0.85, top - h * 0.65),
            (x + w / 2.0, top - h * 0.95),
            (x + w * 0.15, top - h * 0.65),
            (x + w * 0.15, top - h * 0.12),
        ],
        PaintMode::FillStroke,
    );

    // Cross centered at 40% of the height
    let cross_w = w * 0.08;
    let cross_h = h * 0.35;
    let center_x = x + w / 2.0;
    let center_y = top - h * 0.40;

    layer.set_fill_color(Color::Rgb(CREST_GOLD));
    layer.add_rect(
        Mm(center_x - cross_w / 2.0),
        Mm(center_y - cross_h / 2.0),
        Mm(center_x + cross_w / 2.0),
        Mm(center_y + cross_h / 2.0),
        PaintMode::Fill,
    );
    layer.add_rect(
        Mm(center_x - cross_h / 2.0),
        Mm(center_y - cross_w / 2.0),
        Mm(center_x + cross_h / 2.0),
        Mm(center_y + cross_w / 2.0),
        PaintMode::Fill,
    );

    layer.set_fill_color(Color::Rgb(WHITE));
    layer.add_rect(
        Mm(x + w * 0.15),
        Mm(top - h * 0.90),
        Mm(x + w * 0.85),
        Mm(top - h * 0.75),
        PaintMode::Fill,
    );

    let label = "UCMC";
    let size = 7.0;
    let measurer = get_builtin_measurer(fonts.bold);
    let label_x = x + (w - measurer.measure_width_mm(label, size)) / 2.0;
    let baseline = top - h * 0.80 - measurer.cap_height_mm(size);

    layer.set_fill_color(Color::Rgb(CREST_BLUE));
    layer.use_text_builtin(label, size, Mm(label_x), Mm(baseline), fonts.bold);

    layer.restore_graphics_state();
}
