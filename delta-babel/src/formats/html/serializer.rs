//! HTML serialization (Delta → HTML export)
//!
//! Pipeline: Delta → IR blocks → HTML string.
//!
//! Every non-empty block becomes one block element. Consecutive list items of the same kind share
//! one `<ol>`/`<ul>` wrapper, which is the only state carried from one block to the next.

use crate::common::escape::escape;
use crate::delta::{Attributes, Insert, ListKind};
use crate::ir::nodes::{Block, Inline};

static HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const VOID_TAGS: [&str; 3] = ["hr", "br", "img"];

/// Render IR blocks as an HTML fragment.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut writer = HtmlWriter::default();
    for block in blocks.iter().filter(|block| !block.is_empty()) {
        writer.write_block(block);
    }
    writer.finish()
}

/// Output buffer plus the list wrapper that is currently open.
#[derive(Default)]
struct HtmlWriter {
    out: String,
    open_list: Option<ListKind>,
}

impl HtmlWriter {
    fn write_block(&mut self, block: &Block) {
        self.switch_list(block.attributes.list());

        let tag = BlockTag::of(block);
        let element = Element {
            names: tag.names(),
            attrs: tag.attrs(block),
            style: style(&block.attributes, tag.names()),
        };
        tracing::trace!(tag = element.names[0], children = block.children.len(), "block");

        element.open(&mut self.out);
        for (index, inline) in block.children.iter().enumerate() {
            if tag == BlockTag::CodeBlock && index > 0 {
                self.out.push('\n');
            }
            write_inline(&mut self.out, inline);
        }
        element.close(&mut self.out);
    }

    fn switch_list(&mut self, next: Option<ListKind>) {
        if self.open_list == next {
            return;
        }
        match self.open_list {
            Some(ListKind::Ordered) => self.out.push_str("</ol>"),
            Some(ListKind::Bullet) => self.out.push_str("</ul>"),
            None => {}
        }
        match next {
            Some(ListKind::Ordered) => self.out.push_str("<ol>"),
            Some(ListKind::Bullet) => self.out.push_str("<ul>"),
            None => {}
        }
        self.open_list = next;
    }

    fn finish(mut self) -> String {
        self.switch_list(None);
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTag {
    Blockquote,
    ListItem,
    Heading(usize),
    Anchor,
    CodeBlock,
    Paragraph,
}

impl BlockTag {
    fn of(block: &Block) -> Self {
        let attributes = &block.attributes;
        if attributes.blockquote() {
            BlockTag::Blockquote
        } else if attributes.list().is_some() {
            BlockTag::ListItem
        } else if let Some(level) = attributes.header().filter(|level| (1..=6).contains(level)) {
            BlockTag::Heading(level as usize)
        } else if attributes.link().is_some() {
            BlockTag::Anchor
        } else if attributes.code_block() {
            BlockTag::CodeBlock
        } else {
            BlockTag::Paragraph
        }
    }

    fn names(self) -> &'static [&'static str] {
        match self {
            BlockTag::Blockquote => &["blockquote"],
            BlockTag::ListItem => &["li"],
            BlockTag::Heading(level) => &HEADINGS[level - 1..level],
            BlockTag::Anchor => &["a"],
            BlockTag::CodeBlock => &["pre", "code"],
            BlockTag::Paragraph => &["p"],
        }
    }

    fn attrs(self, block: &Block) -> Vec<(&'static str, String)> {
        match (self, block.attributes.link()) {
            (BlockTag::Anchor, Some(href)) => vec![("href", href.to_string())],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineTag {
    Image,
    Video,
    Divider,
    Anchor,
    Bold,
    Italic,
    Code,
    Span,
}

impl InlineTag {
    fn of(inline: &Inline) -> Self {
        let attributes = &inline.attributes;
        match inline.insert {
            Insert::Image(_) => InlineTag::Image,
            Insert::Video(_) => InlineTag::Video,
            Insert::Divider => InlineTag::Divider,
            Insert::Text(_) if attributes.link().is_some() => InlineTag::Anchor,
            Insert::Text(_) if attributes.bold() => InlineTag::Bold,
            Insert::Text(_) if attributes.italic() => InlineTag::Italic,
            Insert::Text(_) if attributes.code() => InlineTag::Code,
            Insert::Text(_) => InlineTag::Span,
        }
    }

    fn names(self) -> &'static [&'static str] {
        match self {
            InlineTag::Image => &["img"],
            InlineTag::Video => &["video"],
            InlineTag::Divider => &["hr"],
            InlineTag::Anchor => &["a"],
            InlineTag::Bold => &["b"],
            InlineTag::Italic => &["i"],
            InlineTag::Code => &["code"],
            InlineTag::Span => &["span"],
        }
    }

    fn attrs(self, inline: &Inline) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        match (self, &inline.insert) {
            (InlineTag::Image, Insert::Image(src)) => {
                attrs.push(("src", src.clone()));
                if let Some(alt) = inline.attributes.alt() {
                    attrs.push(("alt", alt.to_string()));
                }
            }
            (InlineTag::Video, Insert::Video(src)) => attrs.push(("src", src.clone())),
            (InlineTag::Anchor, _) => {
                if let Some(href) = inline.attributes.link() {
                    attrs.push(("href", href.to_string()));
                }
            }
            _ => {}
        }
        attrs
    }
}

fn write_inline(out: &mut String, inline: &Inline) {
    let tag = InlineTag::of(inline);
    let element = Element {
        names: tag.names(),
        attrs: tag.attrs(inline),
        style: style(&inline.attributes, tag.names()),
    };

    // A bare span adds nothing.
    let bare = tag == InlineTag::Span && element.attrs.is_empty() && element.style.is_empty();
    if !bare {
        element.open(out);
    }
    if let Insert::Text(text) = &inline.insert {
        out.push_str(&escape(text));
    }
    if !bare {
        element.close(out);
    }
}

/// CSS for the formatting `names` cannot express on their own.
///
/// Declarations always come in the order font-weight, font-style, color, text-decoration.
fn style(attributes: &Attributes, names: &[&str]) -> String {
    let mut style = String::new();
    if attributes.bold() && !names.contains(&"b") {
        style.push_str("font-weight:bold;");
    }
    if attributes.italic() && !names.contains(&"i") {
        style.push_str("font-style:italic;");
    }
    if let Some(color) = attributes.color() {
        style.push_str("color:");
        style.push_str(color);
        style.push(';');
    }
    match (attributes.underline(), attributes.strike()) {
        (true, true) => style.push_str("text-decoration:underline line-through;"),
        (true, false) => style.push_str("text-decoration:underline;"),
        (false, true) => style.push_str("text-decoration:line-through;"),
        (false, false) => {}
    }
    style
}

/// One element, possibly spelled with several nested tags (`<pre><code>`).
///
/// Attributes go on the outermost tag.
struct Element {
    names: &'static [&'static str],
    attrs: Vec<(&'static str, String)>,
    style: String,
}

impl Element {
    fn open(&self, out: &mut String) {
        for (depth, name) in self.names.iter().enumerate() {
            out.push('<');
            out.push_str(name);
            if depth == 0 {
                for (key, value) in &self.attrs {
                    push_attr(out, key, value);
                }
                if !self.style.is_empty() {
                    push_attr(out, "style", &self.style);
                }
            }
            out.push('>');
        }
    }

    fn close(&self, out: &mut String) {
        for name in self.names.iter().rev() {
            if VOID_TAGS.contains(name) {
                continue;
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}
