//! PDF rendering modules

pub mod components;
pub mod helpers;
pub mod layouts;

// Re-export commonly used items for convenience
pub use helpers::{AssetResolver, FileAssetResolver, LayerBuilder, StaticAssetResolver};
pub use layouts::ReportRenderer;
