//! Helper utilities for PDF rendering

pub mod colors;
pub mod crest;
pub mod encoding;
pub mod finalize;
pub mod fonts;
pub mod layer;
pub mod text_metrics;
pub mod wrap;

pub use crest::{AssetResolver, Crest, CrestSource, FileAssetResolver, StaticAssetResolver};
pub use encoding::{page_text, transliterate};
pub use finalize::finalize_pdf;
pub use fonts::FontManager;
pub use layer::LayerBuilder;
pub use text_metrics::{get_builtin_measurer, BuiltinFontMeasurer};
pub use wrap::{fit_lines, truncate_field, wrap_words};
