//! Appending attachments to the rendered report
//!
//! Page concatenation is delegated to a [`PageMerger`]. [`AttachmentMerger`]
//! stages the files in a scoped temporary directory and falls back to the
//! unmerged report whenever anything goes wrong.

mod ghostscript;

pub use ghostscript::GhostscriptMerger;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Settings;
use crate::error::{MergeError, RenderError};

/// Something that can concatenate PDF files into one
pub trait PageMerger: Send + Sync {
    /// Write the pages of `inputs`, in order, to `output`
    fn merge_files(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError>;

    /// Short name used in log messages
    fn name(&self) -> &str;
}

/// A merger that never merges; the report is returned unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughMerger;

impl PageMerger for PassthroughMerger {
    fn merge_files(&self, _inputs: &[PathBuf], _output: &Path) -> Result<(), MergeError> {
        Err(MergeError::Unavailable("merging disabled".to_string()))
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

/// File name of the staged report inside the merge directory
const PRIMARY_NAME: &str = "main.pdf";

/// File name the merger writes its result to
const MERGED_NAME: &str = "merged.pdf";

/// Appends attachment PDFs to a rendered report
pub struct AttachmentMerger<'a> {
    merger: &'a dyn PageMerger,
    temp_root: PathBuf,
}

impl<'a> AttachmentMerger<'a> {
    pub fn new(merger: &'a dyn PageMerger, settings: &Settings) -> Self {
        Self {
            merger,
            temp_root: settings.temp_dir.clone(),
        }
    }

    /// Merge `primary` with the PDFs at `paths`
    ///
    /// Missing files are skipped. Any failure while staging or merging is
    /// logged and the unmerged `primary` is returned instead; the temporary
    /// directory is removed on every path.
    pub fn merge(&self, primary: Vec<u8>, paths: &[PathBuf]) -> Result<Vec<u8>, RenderError> {
        if paths.is_empty() {
            return Ok(primary);
        }

        let existing: Vec<PathBuf> = paths
            .iter()
            .filter(|path| {
                let found = path.is_file();
                if !found {
                    log::warn!("Attachment not found, skipping: {}", path.display());
                }
                found
            })
            .cloned()
            .collect();

        if existing.is_empty() {
            return Ok(primary);
        }

        match self.merge_in_temp_dir(&primary, &existing) {
            Ok(merged) => {
                log::info!(
                    "Merged report with {} attachments using {}",
                    existing.len(),
                    self.merger.name()
                );
                Ok(merged)
            }
            Err(e) => {
                log::warn!(
                    "Attachment merge with {} failed, returning report only: {}",
                    self.merger.name(),
                    e
                );
                Ok(primary)
            }
        }
    }

    fn merge_in_temp_dir(
        &self,
        primary: &[u8],
        attachments: &[PathBuf],
    ) -> Result<Vec<u8>, MergeError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        // Dropped (and deleted) when this function returns
        let dir = tempfile::Builder::new()
            .prefix(&format!("pdf_merge_{}_", timestamp))
            .tempdir_in(&self.temp_root)?;

        let primary_path = dir.path().join(PRIMARY_NAME);
        std::fs::write(&primary_path, primary)?;

        let mut inputs = Vec::with_capacity(attachments.len() + 1);
        inputs.push(primary_path);
        inputs.extend_from_slice(attachments);

        let output = dir.path().join(MERGED_NAME);
        self.merger.merge_files(&inputs, &output)?;

        Ok(std::fs::read(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records calls and writes a fixed result
    struct RecordingMerger {
        calls: AtomicUsize,
        inputs: Mutex<Vec<PathBuf>>,
    }

    impl RecordingMerger {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                inputs: Mutex::new(Vec::new()),
            }
        }
    }

    impl PageMerger for RecordingMerger {
        fn merge_files(&self, inputs: &[PathBuf], output: &Path) -> Result<(), MergeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.inputs.lock().unwrap() = inputs.to_vec();
            std::fs::write(output, b"%PDF-merged")?;
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct FailingMerger;

    impl PageMerger for FailingMerger {
        fn merge_files(&self, _inputs: &[PathBuf], _output: &Path) -> Result<(), MergeError> {
            Err(MergeError::ToolFailed {
                status: "exit status: 1".to_string(),
                stderr: "broken".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            temp_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    fn leftover_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_empty_list_skips_merger() {
        let temp = tempfile::TempDir::new().unwrap();
        let merger = RecordingMerger::new();
        let result = AttachmentMerger::new(&merger, &settings_in(temp.path()))
            .merge(b"%PDF-primary".to_vec(), &[])
            .unwrap();

        assert_eq!(result, b"%PDF-primary");
        assert_eq!(merger.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_missing_skips_merger() {
        let temp = tempfile::TempDir::new().unwrap();
        let merger = RecordingMerger::new();
        let paths = vec![temp.path().join("nope.pdf")];
        let result = AttachmentMerger::new(&merger, &settings_in(temp.path()))
            .merge(b"%PDF-primary".to_vec(), &paths)
            .unwrap();

        assert_eq!(result, b"%PDF-primary");
        assert_eq!(merger.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_merge_passes_primary_first() {
        let temp = tempfile::TempDir::new().unwrap();
        let staging = temp.path().join("staging");
        std::fs::create_dir(&staging).unwrap();
        let attachment = temp.path().join("anexo.pdf");
        std::fs::write(&attachment, b"%PDF-anexo").unwrap();
        let missing = temp.path().join("missing.pdf");

        let merger = RecordingMerger::new();
        let result = AttachmentMerger::new(&merger, &settings_in(&staging))
            .merge(b"%PDF-primary".to_vec(), &[missing, attachment.clone()])
            .unwrap();

        assert_eq!(result, b"%PDF-merged");
        assert_eq!(merger.calls.load(Ordering::SeqCst), 1);

        let inputs = merger.inputs.lock().unwrap().clone();
        assert_eq!(inputs.len(), 2);
        assert!(inputs[0].ends_with(PRIMARY_NAME));
        assert_eq!(inputs[1], attachment);

        // Staging directory cleaned up
        assert_eq!(leftover_entries(&staging), 0);
    }

    #[test]
    fn test_failed_merge_returns_primary() {
        let temp = tempfile::TempDir::new().unwrap();
        let staging = temp.path().join("staging");
        std::fs::create_dir(&staging).unwrap();
        let attachment = temp.path().join("anexo.pdf");
        std::fs::write(&attachment, b"%PDF-anexo").unwrap();

        let result = AttachmentMerger::new(&FailingMerger, &settings_in(&staging))
            .merge(b"%PDF-primary".to_vec(), &[attachment])
            .unwrap();

        assert_eq!(result, b"%PDF-primary");
        assert_eq!(leftover_entries(&staging), 0);
    }

    #[test]
    fn test_passthrough_returns_primary() {
        let temp = tempfile::TempDir::new().unwrap();
        let attachment = temp.path().join("anexo.pdf");
        std::fs::write(&attachment, b"%PDF-anexo").unwrap();

        let result = AttachmentMerger::new(&PassthroughMerger, &settings_in(temp.path()))
            .merge(b"%PDF-primary".to_vec(), &[attachment])
            .unwrap();

        assert_eq!(result, b"%PDF-primary");
    }

    #[test]
    fn test_unusable_temp_root_returns_primary() {
        let temp = tempfile::TempDir::new().unwrap();
        let attachment = temp.path().join("anexo.pdf");
        std::fs::write(&attachment, b"%PDF-anexo").unwrap();

        let merger = RecordingMerger::new();
        let settings = settings_in(&temp.path().join("does/not/exist"));
        let result = AttachmentMerger::new(&merger, &settings)
            .merge(b"%PDF-primary".to_vec(), &[attachment])
            .unwrap();

        assert_eq!(result, b"%PDF-primary");
        assert_eq!(merger.calls.load(Ordering::SeqCst), 0);
    }
}
