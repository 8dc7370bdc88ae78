use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";

/// A file previously uploaded for a case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachedDocument {
    #[serde(rename = "nombre_original")]
    pub original_name: String,
    #[serde(rename = "nombre_archivo")]
    pub stored_name: String,
    #[serde(rename = "tipo_archivo")]
    pub mime_type: String,
    #[serde(rename = "tamano_bytes")]
    pub size_bytes: u64,
    #[serde(rename = "ruta_archivo")]
    pub path: PathBuf,
    #[serde(rename = "convertido_pdf")]
    pub converted_to_pdf: bool,
    #[serde(rename = "ruta_pdf")]
    pub pdf_path: Option<PathBuf>,
}

/// Why an attachment was left out of the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotPdf(String),
    Missing(PathBuf),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotPdf(mime) => write!(f, "type {:?} is not a PDF", mime),
            SkipReason::Missing(path) => write!(f, "{} not found", path.display()),
        }
    }
}

impl AttachedDocument {
    /// The normalized PDF, when the upload was converted and the result recorded
    fn converted_pdf(&self) -> Option<&Path> {
        match &self.pdf_path {
            Some(p) if self.converted_to_pdf && !p.as_os_str().is_empty() => Some(p),
            _ => None,
        }
    }

    /// The file that goes into the merge: the normalized PDF when one exists
    pub fn merge_source(&self) -> &Path {
        self.converted_pdf().unwrap_or(&self.path)
    }

    /// A PDF upload, or a converted upload whose PDF path is known
    pub fn is_pdf(&self) -> bool {
        self.converted_pdf().is_some() || self.mime_type.trim().eq_ignore_ascii_case(PDF_MIME)
    }

    /// Check whether this attachment can be merged, returning its source path
    pub fn eligible_source(&self) -> Result<&Path, SkipReason> {
        if !self.is_pdf() {
            return Err(SkipReason::NotPdf(self.mime_type.clone()));
        }
        let source = self.merge_source();
        if source.as_os_str().is_empty() || !source.is_file() {
            return Err(SkipReason::Missing(source.to_path_buf()));
        }
        Ok(source)
    }
}

/// Select the merge sources for a list of attachments, preserving order
///
/// Ineligible entries are logged and skipped.
pub fn merge_sources(attachments: &[AttachedDocument]) -> Vec<PathBuf> {
    attachments
        .iter()
        .filter_map(|doc| match doc.eligible_source() {
            Ok(path) => Some(path.to_path_buf()),
            Err(reason) => {
                log::warn!(
                    "Skipping attachment {:?}: {}",
                    doc.original_name,
                    reason
                );
                None
            }
        })
        .collect()
}
