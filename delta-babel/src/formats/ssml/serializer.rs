//! SSML serialization (Delta → SSML export)
//!
//! Only what a speech engine can voice survives: text, bold as `<emphasis>`, and the alt text of
//! embeds.

use crate::common::escape::escape;
use crate::delta::Insert;
use crate::ir::nodes::{Block, Inline};

/// Render IR blocks as an SSML document.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::from("<speak>");
    for block in blocks.iter().filter(|block| !block.is_empty()) {
        out.push_str("<p>");
        for inline in &block.children {
            write_inline(&mut out, inline);
        }
        out.push_str("</p>");
    }
    out.push_str("</speak>");
    out
}

fn write_inline(out: &mut String, inline: &Inline) {
    match &inline.insert {
        Insert::Text(text) if inline.attributes.bold() => {
            out.push_str("<emphasis>");
            out.push_str(&escape(text));
            out.push_str("</emphasis>");
        }
        Insert::Text(text) => out.push_str(&escape(text)),
        _ => {
            if let Some(alt) = inline.attributes.alt() {
                out.push_str(&escape(alt));
            }
        }
    }
}
