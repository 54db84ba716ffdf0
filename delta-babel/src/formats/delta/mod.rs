//! Delta JSON format implementation
//!
//! The `{"ops": [...]}` document an editor stores, read and written as is.

use crate::delta::Delta;
use crate::error::FormatError;
use crate::format::Format;

pub struct DeltaFormat {
    pretty: bool,
}

impl DeltaFormat {
    pub fn new(pretty: bool) -> Self {
        DeltaFormat { pretty }
    }
}

impl Default for DeltaFormat {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Format for DeltaFormat {
    fn name(&self) -> &str {
        "delta"
    }

    fn description(&self) -> &str {
        "Quill delta JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json", "delta"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Delta, FormatError> {
        Delta::from_json(source)
    }

    fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
        delta.to_json(self.pretty)
    }
}
