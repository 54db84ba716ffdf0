//! NPF serialization (Delta → NPF export)
//!
//! Pipeline: Delta → IR blocks → NPF content items.
//!
//! Each block's text runs are concatenated into one text item and their inline attributes turn
//! into formatting ranges over the concatenated text. Embeds don't belong to a text item in NPF, so
//! they are emitted as their own content items the moment they are met.

use crate::common::mime::{guess_image_mime, guess_video_mime};
use crate::delta::{Insert, ListKind};
use crate::formats::npf::model::{
    ContentItem, FormattingRange, ImageContent, Media, Npf, TextContent, TextSubtype, VideoContent,
};
use crate::ir::nodes::{Block, Inline};
use crate::mappings::formatting::merge_formatting;

/// Colour used to paint inline code, which NPF has no formatting type for.
pub const CODE_COLOR: &str = "#e83e8c";

/// Render IR blocks as an NPF post.
pub fn render_blocks(blocks: &[Block]) -> Npf {
    let mut content = Vec::new();
    for block in blocks.iter().filter(|block| !block.is_empty()) {
        render_block(block, &mut content);
    }
    Npf { content }
}

fn render_block(block: &Block, content: &mut Vec<ContentItem>) {
    let mut text = String::new();
    let mut length = 0;
    let mut formatting = Vec::new();

    for inline in &block.children {
        match &inline.insert {
            Insert::Text(run) => {
                let start = length;
                length += run.chars().count();
                text.push_str(run);
                push_ranges(inline, start, length, &mut formatting);
            }
            Insert::Image(url) => content.push(ContentItem::Image(ImageContent {
                mime: guess_image_mime(url).to_string(),
                url: url.clone(),
            })),
            Insert::Video(url) => content.push(ContentItem::Video(video(url))),
            Insert::Divider => tracing::debug!("NPF has no divider block, dropping it"),
        }
    }

    if text.is_empty() {
        return;
    }

    let attributes = &block.attributes;
    let subtype = match attributes.header() {
        Some(1) => Some(TextSubtype::Heading1),
        Some(2) => Some(TextSubtype::Heading2),
        // Only two heading levels exist; smaller headings become bold text.
        Some(_) => {
            formatting.insert(0, FormattingRange::bold(0, length));
            None
        }
        None if attributes.blockquote() => Some(TextSubtype::Indented),
        None => attributes.list().map(|kind| match kind {
            ListKind::Ordered => TextSubtype::OrderedListItem,
            ListKind::Bullet => TextSubtype::UnorderedListItem,
        }),
    };

    merge_formatting(&mut formatting);
    tracing::trace!(?subtype, ranges = formatting.len(), "text block");

    content.push(ContentItem::Text(TextContent {
        text,
        subtype,
        indent_level: attributes.indent(),
        formatting: (!formatting.is_empty()).then_some(formatting),
    }));
}

fn push_ranges(inline: &Inline, start: usize, end: usize, formatting: &mut Vec<FormattingRange>) {
    let attributes = &inline.attributes;
    if attributes.bold() {
        formatting.push(FormattingRange::bold(start, end));
    }
    if attributes.italic() {
        formatting.push(FormattingRange::italic(start, end));
    }
    if let Some(hex) = attributes.color() {
        formatting.push(FormattingRange::color(start, end, hex));
    }
    if let Some(url) = attributes.link() {
        formatting.push(FormattingRange::link(start, end, url));
    }
    if attributes.code() {
        formatting.push(FormattingRange::painted(start, end, CODE_COLOR));
    }
}

fn video(url: &str) -> VideoContent {
    match guess_video_mime(url) {
        Some(mime) => VideoContent {
            media: Some(Media {
                url: url.to_string(),
                mime: Some(mime.to_string()),
            }),
            ..VideoContent::default()
        },
        None => VideoContent {
            url: Some(url.to_string()),
            ..VideoContent::default()
        },
    }
}
