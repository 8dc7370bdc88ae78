pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod render;
pub mod report;

pub use config::Settings;
pub use error::{ConfigError, MergeError, RenderError};
pub use model::{AttachedDocument, CaseDocument, CaseRecord};
pub use report::{generate_report, DownloadHeaders, Report};

use render::{AssetResolver, ReportRenderer};

/// High-level API for rendering a case to PDF without attachments.
///
/// This renders only the two-page form; use [`generate_report`] to also
/// append the case's PDF attachments.
///
/// # Arguments
///
/// * `case` - The case record to render
/// * `settings` - Page geometry, typography and crest configuration
/// * `assets` - Where to find the institutional crest
///
/// # Returns
///
/// PDF file contents as bytes, or a RenderError on failure.
///
/// # Example
///
/// ```no_run
/// use control_operativo_pdf::render::StaticAssetResolver;
/// use control_operativo_pdf::{render_case, CaseRecord, Settings};
///
/// let case = CaseRecord {
///     id: 7,
///     consultant_name: "María Pérez".to_string(),
///     ..Default::default()
/// };
///
/// let pdf_bytes = render_case(&case, &Settings::default(), &StaticAssetResolver::none()).unwrap();
///
/// std::fs::write("control_operativo_7.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_case(
    case: &CaseRecord,
    settings: &Settings,
    assets: &dyn AssetResolver,
) -> Result<Vec<u8>, RenderError> {
    ReportRenderer::new(settings.clone(), assets).render(case)
}
