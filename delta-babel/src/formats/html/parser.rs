//! HTML parsing (HTML → Delta import)
//!
//! Pipeline: HTML string → RcDom → open/text/close events → Delta
//!
//! The DOM is only used to get well-formed event order out of arbitrary markup. The delta is built
//! straight from the events: inline formatting comes from a stack of attribute frames (one per
//! open element) and block formatting is written onto the newlines that close elements.

use crate::delta::attributes::{
    ALT, BLOCKQUOTE, BOLD, CODE, COLOR, HEADER, INDENT, ITALIC, LINK, LIST, STRIKE, UNDERLINE,
};
use crate::delta::{Attributes, Delta, Insert, ListKind};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose whole subtree is dropped.
const IGNORED: [&str; 6] = ["head", "style", "script", "link", "meta", "title"];

/// Elements that act on open and never hold children.
const SINGLETONS: [&str; 4] = ["hr", "br", "img", "source"];

/// Marker class of videos embedded as iframes by the editor.
const VIDEO_IFRAME_CLASS: &str = "ql-video";

static STYLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|;)\s*([A-Za-z-]+)\s*:\s*([^;]*)").unwrap());

/// Parse an HTML document or fragment into a delta.
pub fn parse_from_html(source: &str) -> Delta {
    // Step 1: HTML string → DOM
    let dom = parse_document(RcDom::default(), Default::default()).one(source);

    // Step 2: DOM → delta
    let mut reader = HtmlReader::default();
    reader.walk(&dom.document);
    reader.finish()
}

#[derive(Default)]
struct HtmlReader {
    delta: Delta,
    /// One frame per open element, inner elements last.
    stack: Vec<Attributes>,
    list: Option<ListKind>,
    /// Number of open `<blockquote>` elements. The quote attributes only land on a newline the
    /// blockquote itself writes, so a quote whose text sits in a `<p>` comes out unquoted.
    quote_depth: usize,
    /// Inside a `<video>` without `src`, waiting for a `<source>` child.
    video_source_pending: bool,
}

impl HtmlReader {
    fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Document => self.walk_children(handle),
            NodeData::Element { name, attrs, .. } => {
                let tag: &str = &name.local;
                if IGNORED.contains(&tag) {
                    tracing::debug!(tag, "skipping element and its content");
                    return;
                }
                let attrs = attrs.borrow();
                self.open(tag, &attrs);
                self.walk_children(handle);
                self.close(tag);
            }
            NodeData::Text { contents } => self.text(&contents.borrow()),
            _ => {}
        }
    }

    fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    fn open(&mut self, tag: &str, attrs: &[Attribute]) {
        let src = attr(attrs, "src");

        match tag {
            "hr" => {
                self.delta.insert(Insert::Divider, Attributes::new());
                return;
            }
            "br" => {
                let attributes = self.current_attributes();
                self.delta.ensure_newline(attributes);
                return;
            }
            "img" => {
                if let Some(src) = src {
                    let mut attributes = self.current_attributes();
                    if let Some(alt) = attr(attrs, "alt") {
                        attributes.set(ALT, alt);
                    }
                    self.delta.insert(Insert::Image(src.to_string()), attributes);
                }
                return;
            }
            "source" => {
                if let (true, Some(src)) = (self.video_source_pending, src) {
                    self.insert_video(src);
                    self.video_source_pending = false;
                }
                return;
            }
            "video" => match src {
                Some(src) => self.insert_video(src),
                None => self.video_source_pending = true,
            },
            "iframe" => {
                let is_video = attr(attrs, "class").is_some_and(|c| c.contains(VIDEO_IFRAME_CLASS));
                match (is_video, src) {
                    (true, Some(src)) => self.insert_video(src),
                    _ => tracing::debug!("ignoring iframe without video marker"),
                }
            }
            "blockquote" => {
                // Text of the enclosing quote ends where the nested one starts.
                if self.quote_depth > 0 {
                    self.delta.ensure_newline(quote_attributes(self.quote_depth));
                }
                self.quote_depth += 1;
            }
            "ol" => self.list = Some(ListKind::Ordered),
            "ul" => self.list = Some(ListKind::Bullet),
            // Closes the previous item's line before this item's formatting applies.
            "li" => {
                self.delta.ensure_newline(Attributes::new());
            }
            _ => {}
        }

        let mut frame = tag_attributes(tag, attrs);
        if let Some(style) = attr(attrs, "style") {
            frame.merge(&parse_style(style));
        }
        self.stack.push(frame);
    }

    fn close(&mut self, tag: &str) {
        if SINGLETONS.contains(&tag) {
            return;
        }

        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level: u64 = tag[1..].parse().unwrap_or(1);
                self.delta
                    .ensure_newline(Attributes::new().with(HEADER, level));
            }
            "li" => {
                if let Some(kind) = self.list {
                    self.delta
                        .ensure_newline(Attributes::new().with(LIST, kind.as_str()));
                }
            }
            "p" => {
                self.delta.ensure_double_newline(Attributes::new());
            }
            "blockquote" => {
                self.delta.ensure_newline(quote_attributes(self.quote_depth));
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            "ol" | "ul" => self.list = None,
            "video" => self.video_source_pending = false,
            _ => {}
        }

        self.stack.pop();
    }

    fn text(&mut self, text: &str) {
        let attributes = self.current_attributes();
        self.delta.insert(text, attributes);
    }

    fn insert_video(&mut self, src: &str) {
        let attributes = self.current_attributes();
        self.delta.insert(Insert::Video(src.to_string()), attributes);
    }

    /// All open frames folded together, inner frames winning.
    fn current_attributes(&self) -> Attributes {
        Attributes::merged(&self.stack)
    }

    fn finish(mut self) -> Delta {
        self.delta.ensure_newline(Attributes::new());
        self.delta
    }
}

/// Block formatting of a line inside `depth` nested quotes.
fn quote_attributes(depth: usize) -> Attributes {
    let mut attributes = Attributes::new().with(BLOCKQUOTE, true);
    if depth > 1 {
        attributes.set(INDENT, (depth - 1) as u64);
    }
    attributes
}

fn attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|attribute| &*attribute.name.local == name)
        .map(|attribute| &*attribute.value)
}

/// Inline formatting implied by the element itself.
fn tag_attributes(tag: &str, attrs: &[Attribute]) -> Attributes {
    let mut attributes = Attributes::new();
    match tag {
        "b" | "strong" => attributes.set(BOLD, true),
        "i" | "em" => attributes.set(ITALIC, true),
        "code" => attributes.set(CODE, true),
        "a" => {
            if let Some(href) = attr(attrs, "href") {
                attributes.set(LINK, href);
            }
        }
        _ => {}
    }
    attributes
}

/// Inline formatting from a `style` attribute.
fn parse_style(style: &str) -> Attributes {
    let mut attributes = Attributes::new();
    for declaration in STYLE_DECLARATION.captures_iter(style) {
        let property = declaration[1].to_ascii_lowercase();
        let value = declaration[2].trim();
        match property.as_str() {
            "font-weight" if matches!(value, "bold" | "bolder") => attributes.set(BOLD, true),
            "font-style" if matches!(value, "italic" | "oblique") => attributes.set(ITALIC, true),
            "text-decoration" => {
                if value.contains("underline") {
                    attributes.set(UNDERLINE, true);
                }
                if value.contains("line-through") {
                    attributes.set(STRIKE, true);
                }
            }
            "color" if !value.is_empty() => attributes.set(COLOR, value),
            _ => {}
        }
    }
    attributes
}
