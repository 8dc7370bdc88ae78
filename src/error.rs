use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Merge tool unavailable: {0}")]
    Unavailable(String),

    #[error("Merge tool exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },

    #[error("IO error during merge: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid case document: {0}")]
    InvalidCase(String),
}
