//! JSON spec rendering

use super::SpecRenderer;
use crate::core::ProjectRecord;
use crate::error::TfcSpecError;

pub struct JsonSpecRenderer;

impl Default for JsonSpecRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSpecRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SpecRenderer for JsonSpecRenderer {
    fn render(&self, record: &ProjectRecord) -> Result<String, TfcSpecError> {
        let mut rendered = serde_json::to_string_pretty(record)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
