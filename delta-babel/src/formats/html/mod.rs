//! HTML format implementation
//!
//! Strategy: Delta → IR → HTML for export, HTML → DOM → Delta for import.
//!
//! # Data Model
//!
//! Block mappings, first match wins:
//!
//! | Block attribute     | HTML Element          | Notes                                   |
//! |---------------------|-----------------------|-----------------------------------------|
//! | `blockquote`        | `<blockquote>`        |                                         |
//! | `list`              | `<li>`                | Wrapped in a shared `<ol>` / `<ul>`     |
//! | `header` (1-6)      | `<h1>`-`<h6>`         |                                         |
//! | `link`              | `<a href>`            | Linked embeds                           |
//! | `code-block`        | `<pre><code>`         | Adjacent lines merged, joined by `\n`   |
//! | (none)              | `<p>`                 |                                         |
//!
//! Inline mappings, first match wins:
//!
//! | Inline              | HTML Element          | Notes                                   |
//! |---------------------|-----------------------|-----------------------------------------|
//! | image embed         | `<img src alt>`       |                                         |
//! | video embed         | `<video src>`         |                                         |
//! | divider embed       | `<hr>`                |                                         |
//! | `link`              | `<a href>`            |                                         |
//! | `bold`              | `<b>`                 |                                         |
//! | `italic`            | `<i>`                 |                                         |
//! | `code`              | `<code>`              |                                         |
//! | (none)              | `<span>`              | Omitted when it would carry no style    |
//!
//! Whatever the chosen tag doesn't express (colour, underline, strike, bold or italic under
//! another tag) goes into a `style` attribute.
//!
//! # Import
//!
//! Import recognises the same vocabulary plus `<strong>`, `<em>`, `<br>`, `<iframe class="ql-video">`,
//! `<video><source>` and inline `style` declarations. `<head>`, `<style>`, `<script>`, `<link>`,
//! `<meta>` and `<title>` are skipped with their content.

pub mod parser;
pub mod serializer;

use crate::delta::Delta;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::IntermediateOptions;

/// HTML format with configurable options
#[derive(Default)]
pub struct HtmlFormat {
    options: IntermediateOptions,
}

impl HtmlFormat {
    pub fn new(options: IntermediateOptions) -> Self {
        HtmlFormat { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Delta, FormatError> {
        Ok(parser::parse_from_html(source))
    }

    fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
        Ok(crate::delta_to_html_with_options(delta, &self.options))
    }
}
