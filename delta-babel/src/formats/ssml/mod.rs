//! SSML format implementation
//!
//! Speech Synthesis Markup for reading a document aloud. Serialization only.
//!
//! # Data Model
//!
//! | IR Element       | SSML Element          |
//! |------------------|-----------------------|
//! | Block            | `<p>`                 |
//! | Bold text        | `<emphasis>`          |
//! | Embed with `alt` | the alt text          |
//! | Other formatting | dropped               |

pub mod serializer;

use crate::delta::Delta;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::IntermediateOptions;

#[derive(Default)]
pub struct SsmlFormat {
    options: IntermediateOptions,
}

impl SsmlFormat {
    pub fn new(options: IntermediateOptions) -> Self {
        SsmlFormat { options }
    }
}

impl Format for SsmlFormat {
    fn name(&self) -> &str {
        "ssml"
    }

    fn description(&self) -> &str {
        "Speech Synthesis Markup Language (export only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ssml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
        Ok(crate::delta_to_ssml_with_options(delta, &self.options))
    }
}
