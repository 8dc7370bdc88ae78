pub mod attachment;
pub mod case;

pub use attachment::{merge_sources, AttachedDocument, SkipReason, PDF_MIME};
pub use case::{optional_number, CaseRecord, DocumentType, FinalDisposition, Sex};

use serde::{Deserialize, Serialize};

/// A case record together with its attachments, as exported by the case store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseDocument {
    #[serde(flatten)]
    pub case: CaseRecord,
    #[serde(rename = "documentos_adjuntos", default)]
    pub attachments: Vec<AttachedDocument>,
}
