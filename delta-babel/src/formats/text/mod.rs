//! Plain text format implementation
//!
//! Parsing wraps the text in a single unformatted insert. Serialization keeps the text inserts and
//! drops embeds and all formatting.

use crate::delta::{Attributes, Delta, Insert};
use crate::error::FormatError;
use crate::format::Format;

/// Concatenate the text inserts of a delta.
pub fn delta_to_text(delta: &Delta) -> String {
    delta
        .ops
        .iter()
        .filter_map(|op| op.insert.as_text())
        .collect()
}

/// Wrap plain text in a delta, making sure it ends with a newline.
pub fn text_to_delta(text: &str) -> Delta {
    let mut text = text.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    let mut delta = Delta::new();
    delta.insert(Insert::Text(text), Attributes::new());
    delta
}

#[derive(Default)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text without formatting"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Delta, FormatError> {
        Ok(text_to_delta(source))
    }

    fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
        Ok(delta_to_text(delta))
    }
}
