//! Multi-format interoperability for rich-text deltas
//!
//! ```text
//!     This crate converts between Quill deltas and the formats a publishing pipeline needs: HTML
//!     (both ways), Tumblr's Neue Post Format (both ways), SSML (export) and plain text (both ways).
//! ```
//!
//! Architecture
//!
//! ```text
//!     - Delta: the hub document every conversion passes through, see [delta]
//!     - IR: deltas keep block formatting on trailing newlines; renderers work on the block tree
//!       built from them, see [ir] and [mappings::flat_to_nested]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!
//!     This is a pure lib, that is, it powers the delta-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches files. Diagnostics go through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── delta                   # Delta, Op, Insert, Attributes
//!     ├── ir                      # Block / Inline tree
//!     ├── mappings
//!     │   ├── flat_to_nested.rs   # Delta → IR
//!     │   └── formatting.rs       # NPF formatting range merge / split
//!     ├── common                  # escaping, MIME guessing
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── lib.rs
//! ```
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── main.rs
//!         ├── export.rs
//!         └── import.rs
//!
//! note that rust does not by default discover tests in subdirectories, so we need to include these
//! in the mod.
//!
//! Lossiness
//!
//! ```text
//!     Every target format is smaller than the delta vocabulary. HTML drops nothing the editor
//!     produces; NPF has only two heading levels and no underline, strike or divider; SSML keeps
//!     text, emphasis and alt text only. Round trips are therefore approximate.
//! ```
//!
//! Example
//!
//! ```ignore
//! let delta = delta_babel::html_to_delta("<h1>Hello</h1><p>world</p>");
//! let npf = delta_babel::delta_to_npf(&delta);
//! let html = delta_babel::npf_to_html(&npf);
//! ```

pub mod common;
pub mod delta;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod ir;
pub mod mappings;

pub use delta::{Attributes, Delta, Insert, Op};
pub use error::FormatError;
pub use format::{Format, FormatOptions};
pub use formats::npf::model::Npf;
pub use formats::text::{delta_to_text, text_to_delta};
pub use ir::IntermediateOptions;
pub use registry::FormatRegistry;

/// Converts a delta to the Intermediate Representation (IR).
///
/// Uses the default options, which merge adjacent code-block lines.
pub fn to_ir(delta: &Delta) -> Vec<ir::Block> {
    ir::delta_to_intermediate(delta, &IntermediateOptions::default())
}

/// Renders a delta as an HTML fragment.
pub fn delta_to_html(delta: &Delta) -> String {
    delta_to_html_with_options(delta, &IntermediateOptions::default())
}

pub fn delta_to_html_with_options(delta: &Delta, options: &IntermediateOptions) -> String {
    let blocks = ir::delta_to_intermediate(delta, options);
    formats::html::serializer::render_blocks(&blocks)
}

/// Renders a delta as an NPF post.
pub fn delta_to_npf(delta: &Delta) -> Npf {
    delta_to_npf_with_options(delta, &IntermediateOptions::default())
}

pub fn delta_to_npf_with_options(delta: &Delta, options: &IntermediateOptions) -> Npf {
    let blocks = ir::delta_to_intermediate(delta, options);
    formats::npf::serializer::render_blocks(&blocks)
}

/// Renders a delta as SSML.
pub fn delta_to_ssml(delta: &Delta) -> String {
    delta_to_ssml_with_options(delta, &IntermediateOptions::default())
}

pub fn delta_to_ssml_with_options(delta: &Delta, options: &IntermediateOptions) -> String {
    let blocks = ir::delta_to_intermediate(delta, options);
    formats::ssml::serializer::render_blocks(&blocks)
}

/// Reads an HTML document or fragment into a delta.
pub fn html_to_delta(html: &str) -> Delta {
    formats::html::parser::parse_from_html(html)
}

/// Reads an NPF post into a delta.
pub fn npf_to_delta(npf: &Npf) -> Delta {
    formats::npf::parser::parse_from_npf(npf)
}

/// HTML → delta → NPF.
pub fn html_to_npf(html: &str) -> Npf {
    delta_to_npf(&html_to_delta(html))
}

/// NPF → delta → HTML.
pub fn npf_to_html(npf: &Npf) -> String {
    delta_to_html(&npf_to_delta(npf))
}
