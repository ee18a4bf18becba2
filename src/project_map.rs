use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::classifier::{self, RelativePath};
use crate::constants::markers::{IDENTIFIER_SEPARATOR, VERSION_CONTROL, WORKSPACE_TOOL};
use crate::core::{Category, CategoryMap, Marker};
use crate::error::TfcSpecError;
use crate::lister::WorkspaceLister;
use crate::progress::ProgressReporter;

/// Groups scanned markers into the `git` and `terraform` buckets
pub struct ProjectMapBuilder {
    root: PathBuf,
    root_name: String,
    error_on_multiple_roots: bool,
}

impl ProjectMapBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root_name = classifier::root_name(&root);
        Self {
            root,
            root_name,
            error_on_multiple_roots: false,
        }
    }

    /// Fail instead of warning when a second version-control root is found
    pub fn with_error_on_multiple_roots(mut self, error_on_multiple_roots: bool) -> Self {
        self.error_on_multiple_roots = error_on_multiple_roots;
        self
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Walk `paths` in order and fill the category map.
    ///
    /// Workspace-tool markers are resolved against the first version-control
    /// root seen so far. Any listing failure aborts the whole build.
    ///
    /// The lister always runs in the marker's own directory (`root/<owning
    /// path>`, or `root` for a marker at the root), including when that
    /// directory is the version-control root. The process working directory
    /// is never used.
    pub fn build<L>(
        &self,
        paths: &[RelativePath],
        lister: &L,
        progress: Option<&ProgressReporter>,
    ) -> Result<CategoryMap, TfcSpecError>
    where
        L: WorkspaceLister + ?Sized,
    {
        let mut map = CategoryMap::new();

        for path in paths {
            match Marker::from_path(path.clone()) {
                Some(Marker::VersionControlRoot(path)) => {
                    self.record_version_control_root(&path, &mut map)?;
                }
                Some(Marker::WorkspaceToolRoot(path)) => {
                    self.record_workspaces(&path, &mut map, lister, progress)?;
                }
                None => trace!(path = %path, "ignoring hidden directory"),
            }
        }

        Ok(map)
    }

    fn record_version_control_root(
        &self,
        path: &RelativePath,
        map: &mut CategoryMap,
    ) -> Result<(), TfcSpecError> {
        let owning = path.owning_directory(VERSION_CONTROL, &self.root_name);
        info!(path = %path, project = %owning, "found version-control root");

        // Any path containing `.git` lands in the bucket, but only a real
        // `.git` directory counts as another repository.
        let is_repository = path.base_name() == VERSION_CONTROL;
        if let Some(first) = map.first(Category::Git).filter(|_| is_repository) {
            if self.error_on_multiple_roots {
                return Err(TfcSpecError::MultipleVersionControlRoots {
                    first: first.to_string(),
                    other: owning,
                });
            }
            debug!(first, other = %owning, "ignoring additional version-control root");
            eprintln!(
                "{} Ignoring additional git repository '{}' (project is '{}')",
                console::style("⚠").yellow(),
                owning,
                first
            );
        }

        map.push(Category::Git, owning);
        Ok(())
    }

    fn record_workspaces<L>(
        &self,
        path: &RelativePath,
        map: &mut CategoryMap,
        lister: &L,
        progress: Option<&ProgressReporter>,
    ) -> Result<(), TfcSpecError>
    where
        L: WorkspaceLister + ?Sized,
    {
        let owning = path.owning_directory(WORKSPACE_TOOL, &self.root_name);
        let Some(git_root) = map.first(Category::Git).map(str::to_string) else {
            return Err(TfcSpecError::MissingVersionControlRoot {
                marker: path.clone(),
            });
        };

        let dir = self.workspace_dir(&path.strip_marker(WORKSPACE_TOOL));
        if !dir.is_dir() {
            return Err(TfcSpecError::WorkspaceDirectory { path: dir });
        }

        let nested = owning != git_root;
        info!(path = %path, owning = %owning, nested, "found workspace-tool root");
        if nested {
            debug!(
                dir = %dir.display(),
                back = %classifier::parent_walk(&owning),
                "querying nested workspace directory"
            );
        }

        if let Some(p) = progress {
            p.querying_workspaces(&owning);
        }

        let workspaces = lister.list_workspaces(&dir)?;
        for workspace in workspaces.iter().filter(|w| !w.is_empty()) {
            let identifier = if nested {
                nested_identifier(&git_root, &owning, workspace)
            } else {
                [owning.as_str(), workspace.as_str()].join(IDENTIFIER_SEPARATOR)
            };
            debug!(%identifier, "recorded workspace");
            map.push(Category::Terraform, identifier);
        }

        Ok(())
    }

    fn workspace_dir(&self, stripped: &str) -> PathBuf {
        if stripped.is_empty() {
            self.root.clone()
        } else {
            self.root.join(Path::new(stripped))
        }
    }
}

/// `<gitRoot>_<owningDir>_<workspace>` flattened to a single segment
fn nested_identifier(git_root: &str, owning: &str, workspace: &str) -> String {
    [git_root, owning, workspace]
        .join(IDENTIFIER_SEPARATOR)
        .replace('/', IDENTIFIER_SEPARATOR)
}
