//! YAML spec rendering

use super::SpecRenderer;
use crate::core::ProjectRecord;
use crate::error::TfcSpecError;

pub struct YamlSpecRenderer;

impl Default for YamlSpecRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlSpecRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SpecRenderer for YamlSpecRenderer {
    fn render(&self, record: &ProjectRecord) -> Result<String, TfcSpecError> {
        Ok(serde_yaml::to_string(record)?)
    }
}
