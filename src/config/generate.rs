//! Generate command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::TfcSpecError;

/// Configuration for the generate command
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// File to write the spec to (stdout when `None`)
    pub output: Option<PathBuf>,
    /// Format of the spec document
    pub format: OutputFormat,
    /// Program used to list workspaces
    pub tool: String,
    /// Fail instead of warning when more than one git root is found
    pub error_on_multiple_roots: bool,
}

impl GenerateConfig {
    pub fn builder() -> GenerateConfigBuilder {
        GenerateConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct GenerateConfigBuilder {
    root: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    format: Option<OutputFormat>,
    tool: Option<String>,
    error_on_multiple_roots: Option<bool>,
}

impl GenerateConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_tool(mut self, tool: String) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn with_error_on_multiple_roots(mut self, error_on_multiple_roots: bool) -> Self {
        self.error_on_multiple_roots = Some(error_on_multiple_roots);
        self
    }
}

fn missing(field: &str) -> TfcSpecError {
    TfcSpecError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for GenerateConfigBuilder {
    type Config = GenerateConfig;

    fn build(self) -> Result<Self::Config, TfcSpecError> {
        let tool = self.tool.ok_or_else(|| missing("tool"))?;
        if tool.trim().is_empty() {
            return Err(TfcSpecError::ConfigurationError {
                message: "Workspace tool program must not be empty".to_string(),
            });
        }

        Ok(GenerateConfig {
            root: self.root.ok_or_else(|| missing("root"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            tool,
            error_on_multiple_roots: self
                .error_on_multiple_roots
                .ok_or_else(|| missing("error_on_multiple_roots"))?,
        })
    }
}
