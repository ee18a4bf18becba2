//! Scan command configuration

use std::path::PathBuf;

use crate::error::TfcSpecError;

/// Configuration for the scan command
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to scan
    pub root: PathBuf,
    /// Hide hidden directories that are neither git nor Terraform markers
    pub markers_only: bool,
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    root: Option<PathBuf>,
    markers_only: bool,
}

impl ScanConfigBuilder {
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_markers_only(mut self, markers_only: bool) -> Self {
        self.markers_only = markers_only;
        self
    }
}

impl crate::common::ConfigBuilder for ScanConfigBuilder {
    type Config = ScanConfig;

    fn build(self) -> Result<Self::Config, TfcSpecError> {
        Ok(ScanConfig {
            root: self
                .root
                .ok_or_else(|| TfcSpecError::ConfigurationError {
                    message: "Missing required field: root".to_string(),
                })?,
            markers_only: self.markers_only,
        })
    }
}
