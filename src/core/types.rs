//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::RelativePath;

/// Kind of marker a scanned path denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    VersionControl,
    WorkspaceTool,
    None,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::VersionControl => write!(f, "git"),
            MarkerKind::WorkspaceTool => write!(f, "terraform"),
            MarkerKind::None => write!(f, "-"),
        }
    }
}

/// A scanned path that is one of the two recognised markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    VersionControlRoot(RelativePath),
    WorkspaceToolRoot(RelativePath),
}

impl Marker {
    /// Classify a scanned path, returning `None` for unrelated hidden
    /// directories
    pub fn from_path(path: RelativePath) -> Option<Self> {
        match path.kind() {
            MarkerKind::VersionControl => Some(Marker::VersionControlRoot(path)),
            MarkerKind::WorkspaceTool => Some(Marker::WorkspaceToolRoot(path)),
            MarkerKind::None => None,
        }
    }
}

/// Bucket of the category map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Git,
    Terraform,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Git => "git",
            Category::Terraform => "terraform",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Append-only buckets of values, one per [`Category`], in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    git: Vec<String>,
    terraform: Vec<String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, value: impl Into<String>) {
        self.bucket_mut(category).push(value.into());
    }

    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Git => &self.git,
            Category::Terraform => &self.terraform,
        }
    }

    pub fn first(&self, category: Category) -> Option<&str> {
        self.values(category).first().map(String::as_str)
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Git => &mut self.git,
            Category::Terraform => &mut self.terraform,
        }
    }
}

/// Composite workspace identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workspace(String);

impl Workspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Workspace {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The document written to the spec file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Workspaces")]
    pub workspaces: Vec<Workspace>,
}
