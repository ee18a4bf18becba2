//! Classification of scanned paths into marker kinds
//!
//! A [`RelativePath`] is a hidden directory found beneath the scan root,
//! always written with `/` separators. Classification is plain substring
//! containment of the marker names, with the version-control marker taking
//! precedence when a path contains both.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::constants::markers::{VERSION_CONTROL, WORKSPACE_TOOL};
use crate::core::MarkerKind;

/// A path relative to the scan root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Build from a filesystem path, normalising separators to `/`
    pub fn from_path(path: &Path) -> Self {
        let joined = path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final segment of the path
    pub fn base_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn is_version_control_marker(&self) -> bool {
        self.0.contains(VERSION_CONTROL)
    }

    pub fn is_workspace_tool_marker(&self) -> bool {
        self.0.contains(WORKSPACE_TOOL)
    }

    pub fn kind(&self) -> MarkerKind {
        if self.is_version_control_marker() {
            MarkerKind::VersionControl
        } else if self.is_workspace_tool_marker() {
            MarkerKind::WorkspaceTool
        } else {
            MarkerKind::None
        }
    }

    /// Remove every occurrence of `marker` and any trailing separator.
    ///
    /// An empty result means the marker sits directly at the scan root.
    pub fn strip_marker(&self, marker: &str) -> String {
        self.0.replace(marker, "").trim_end_matches('/').to_string()
    }

    /// Directory that owns the marker, named relative to the scan root.
    ///
    /// A marker at the root itself is owned by the root, so `root_name` is
    /// returned instead of an empty string.
    pub fn owning_directory(&self, marker: &str, root_name: &str) -> String {
        let stripped = self.strip_marker(marker);
        debug!(path = %self, marker, owning = %stripped, "stripped marker");

        if stripped.is_empty() {
            root_name.to_string()
        } else {
            stripped
        }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RelativePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Name of the scan root as it appears in identifiers
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.to_string_lossy().to_string())
}

/// Relative path leading from `path` back up to the directory it is relative
/// to, one `../` per segment
pub fn parent_walk(path: &str) -> String {
    "../".repeat(path.split('/').count())
}
