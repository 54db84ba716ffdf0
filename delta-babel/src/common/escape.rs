//! Markup escaping for HTML and SSML output.

use std::borrow::Cow;

/// Escapes text content.
///
/// Quotes are escaped as well as `&`, `<` and `>`, so the same function is safe for both text
/// nodes and attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(input)
}
