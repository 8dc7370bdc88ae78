//! One-call report generation: render, then append attachments

use crate::config::Settings;
use crate::error::RenderError;
use crate::merge::{AttachmentMerger, PageMerger};
use crate::model::{merge_sources, AttachedDocument, CaseRecord, PDF_MIME};
use crate::render::{AssetResolver, ReportRenderer};

/// Download filename for a case report
pub fn report_filename(case_id: u32) -> String {
    format!("control_operativo_{}.pdf", case_id)
}

/// Response headers for serving a report as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadHeaders {
    pub content_type: String,
    pub content_disposition: String,
    pub content_length: usize,
}

impl DownloadHeaders {
    pub fn for_case(case_id: u32, length: usize) -> Self {
        Self {
            content_type: PDF_MIME.to_string(),
            content_disposition: format!("attachment; filename={}", report_filename(case_id)),
            content_length: length,
        }
    }

    /// Header name/value pairs in the order they are sent
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", self.content_type.clone()),
            ("Content-Disposition", self.content_disposition.clone()),
            ("Content-Length", self.content_length.to_string()),
        ]
    }
}

/// A finished report ready to be sent
#[derive(Debug, Clone)]
pub struct Report {
    pub bytes: Vec<u8>,
    pub headers: DownloadHeaders,
}

/// Render a case and append its eligible PDF attachments
///
/// Attachments that are not PDFs or are missing on disk are skipped with a
/// warning. A failed merge also degrades to the report alone, so the only
/// error returned is a failure to produce the report itself.
///
/// # Example
///
/// ```no_run
/// use control_operativo_pdf::merge::GhostscriptMerger;
/// use control_operativo_pdf::model::CaseDocument;
/// use control_operativo_pdf::render::FileAssetResolver;
/// use control_operativo_pdf::{generate_report, Settings};
///
/// let json = std::fs::read_to_string("caso.json").unwrap();
/// let doc: CaseDocument = serde_json::from_str(&json).unwrap();
/// let settings = Settings::default();
///
/// let report = generate_report(
///     &doc.case,
///     &doc.attachments,
///     &settings,
///     &FileAssetResolver::new(settings.crest_candidates.clone()),
///     &GhostscriptMerger::new(settings.merge_binary.clone()),
/// )
/// .unwrap();
///
/// std::fs::write("control_operativo.pdf", &report.bytes).unwrap();
/// ```
pub fn generate_report(
    case: &CaseRecord,
    attachments: &[AttachedDocument],
    settings: &Settings,
    assets: &dyn AssetResolver,
    merger: &dyn PageMerger,
) -> Result<Report, RenderError> {
    let sources = merge_sources(attachments);

    let primary = ReportRenderer::new(settings.clone(), assets).render(case)?;
    log::info!(
        "Rendered case {} ({} bytes, {} attachments to merge)",
        case.id,
        primary.len(),
        sources.len()
    );

    let bytes = AttachmentMerger::new(merger, settings).merge(primary, &sources)?;
    let headers = DownloadHeaders::for_case(case.id, bytes.len());

    Ok(Report { bytes, headers })
}
