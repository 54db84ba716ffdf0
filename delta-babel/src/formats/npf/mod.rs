//! NPF format implementation
//!
//! Tumblr's Neue Post Format: a post is a list of typed content blocks, and inline styling is a
//! list of character ranges over a text block.
//!
//! # Data Model
//!
//! | Delta                          | NPF                                          |
//! |--------------------------------|----------------------------------------------|
//! | line with `header: 1` / `2`    | text, subtype `heading1` / `heading2`        |
//! | line with `header` > 2         | text with a bold range over the whole line   |
//! | line with `blockquote`         | text, subtype `indented`                     |
//! | line with `list`               | text, subtype `ordered-list-item` / `unordered-list-item` |
//! | `indent`                       | `indent_level`                               |
//! | `bold` / `italic`              | `bold` / `italic` range                      |
//! | `color`                        | `color` range with `hex`                     |
//! | `link`                         | `link` range with `url`                      |
//! | `code`                         | untyped range painted with [serializer::CODE_COLOR] |
//! | image embed                    | `image/<mime>` block                         |
//! | video embed                    | `video` block, `media` when the type is known |
//!
//! Offsets count Unicode scalar values.

pub mod model;
pub mod parser;
pub mod serializer;

use crate::delta::Delta;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::IntermediateOptions;
use model::Npf;

pub struct NpfFormat {
    options: IntermediateOptions,
    pretty: bool,
}

impl NpfFormat {
    pub fn new(options: IntermediateOptions, pretty: bool) -> Self {
        NpfFormat { options, pretty }
    }
}

impl Default for NpfFormat {
    fn default() -> Self {
        Self::new(IntermediateOptions::default(), true)
    }
}

impl Format for NpfFormat {
    fn name(&self) -> &str {
        "npf"
    }

    fn description(&self) -> &str {
        "Tumblr Neue Post Format JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["npf"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Delta, FormatError> {
        let npf = Npf::from_json(source)?;
        Ok(parser::parse_from_npf(&npf))
    }

    fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
        crate::delta_to_npf_with_options(delta, &self.options).to_json(self.pretty)
    }
}
