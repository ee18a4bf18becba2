use std::path::PathBuf;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::classifier::RelativePath;
use crate::constants::markers::HIDDEN_PREFIX;
use crate::error::TfcSpecError;
use crate::progress::ProgressReporter;

/// Finds every hidden directory beneath a root
pub struct HiddenDirectoryScanner {
    root: PathBuf,
}

impl HiddenDirectoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree depth-first, siblings in file-name order, and collect
    /// the relative path of every directory whose name starts with a dot.
    ///
    /// The root itself is never reported. The first I/O error aborts the
    /// walk; the paths collected so far are carried in the error.
    pub fn scan(
        &self,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RelativePath>, TfcSpecError> {
        info!(root = %self.root.display(), "scanning for hidden directories");

        let mut hidden = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    debug!(root = %self.root.display(), error = %source, "directory walk failed");
                    return Err(TfcSpecError::Scan {
                        root: self.root.clone(),
                        partial: hidden,
                        source,
                    });
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            if !entry.file_name().to_string_lossy().starts_with(HIDDEN_PREFIX) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let relative = RelativePath::from_path(relative);
            debug!(path = %relative, "found hidden directory");

            if let Some(p) = progress {
                p.found_hidden_directory(&relative);
            }
            hidden.push(relative);
        }

        info!(count = hidden.len(), "scan complete");
        Ok(hidden)
    }
}
