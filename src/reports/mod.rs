//! Rendering and writing of the project spec
//!
//! This module contains renderers for the supported output formats:
//! - yaml: the default `spec.yaml` document
//! - json: the same two keys as a JSON object

pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::core::ProjectRecord;
use crate::error::TfcSpecError;

/// Common trait for all spec renderers
pub trait SpecRenderer {
    /// Render the project record as a document
    fn render(&self, record: &ProjectRecord) -> Result<String, TfcSpecError>;
}

// Re-export for convenience
pub use json::JsonSpecRenderer;
pub use yaml::YamlSpecRenderer;

/// Renderer for the requested format
pub fn renderer_for(format: OutputFormat) -> Box<dyn SpecRenderer> {
    match format {
        OutputFormat::Yaml => Box::new(YamlSpecRenderer::new()),
        OutputFormat::Json => Box::new(JsonSpecRenderer::new()),
    }
}

/// Create or truncate `path` and write the rendered document to it
pub fn write_spec(path: &Path, contents: &str) -> Result<(), TfcSpecError> {
    info!(path = %path.display(), bytes = contents.len(), "writing spec");

    let to_write_error = |source: std::io::Error| {
        debug!(path = %path.display(), error = %source, "failed to write spec");
        TfcSpecError::Write {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut file = File::create(path).map_err(to_write_error)?;
    file.write_all(contents.as_bytes()).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)
}
