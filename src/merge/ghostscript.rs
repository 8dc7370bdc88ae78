use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::error::MergeError;

use super::PageMerger;

/// Concatenates PDFs by running Ghostscript's `pdfwrite` device
#[derive(Debug, Clone)]
pub struct GhostscriptMerger {
    binary: String,
}

impl GhostscriptMerger {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, inputs: &[PathBuf], output: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-dNOPAUSE")
            .arg("-dBATCH")
            .arg("-sDEVICE=pdfwrite")
            .arg(format!("-sOutputFile={}", output.display()))
            .args(inputs);
        cmd
    }
}

impl Default for GhostscriptMerger {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_MERGE_BINARY)
    }
}

impl PageMerger for GhostscriptMerger {
    fn merge_files(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError> {
        let start = Instant::now();

        log::info!(
            "Running {} -sDEVICE=pdfwrite on {} files",
            self.binary,
            inputs.len()
        );

        let result = self.command(inputs, output).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MergeError::Unavailable(format!("{} not found", self.binary))
            } else {
                MergeError::Io(e)
            }
        })?;

        if !result.status.success() {
            return Err(MergeError::ToolFailed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        log::info!(
            "{} finished in {} ms",
            self.binary,
            start.elapsed().as_millis()
        );

        Ok(())
    }

    fn name(&self) -> &str {
        "ghostscript"
    }
}
