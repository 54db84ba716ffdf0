//! NPF parsing (NPF → Delta import)
//!
//! Text items are cut at every formatting boundary; each piece is inserted with the attributes of
//! all ranges covering it, followed by a newline that carries the item's subtype as block
//! formatting. Media items become embeds.

use crate::delta::attributes::{BLOCKQUOTE, BOLD, COLOR, HEADER, INDENT, ITALIC, LINK, LIST};
use crate::delta::{Attributes, Delta, Insert, ListKind};
use crate::formats::npf::model::{
    ContentItem, FormattingRange, FormattingType, Npf, TextContent, TextSubtype,
};
use crate::mappings::formatting::{covering, split_points};

/// Convert an NPF post to a delta.
pub fn parse_from_npf(npf: &Npf) -> Delta {
    let mut delta = Delta::new();

    for item in &npf.content {
        match item {
            ContentItem::Text(text) => {
                insert_text(&mut delta, text);
                delta.insert("\n", block_attributes(text));
            }
            ContentItem::Image(image) => {
                delta.insert(Insert::Image(image.url.clone()), Attributes::new());
            }
            ContentItem::Video(video) => match video.source() {
                Some(url) => {
                    delta.insert(Insert::Video(url.to_string()), Attributes::new());
                }
                None => tracing::debug!("video item has no usable url, skipping"),
            },
            ContentItem::Unsupported(value) => {
                tracing::debug!(kind = ?value.get("type"), "skipping unsupported content item")
            }
        }
    }

    delta.ensure_newline(Attributes::new());
    delta
}

fn insert_text(delta: &mut Delta, item: &TextContent) {
    let ranges = match &item.formatting {
        Some(ranges) if !ranges.is_empty() => ranges,
        _ => {
            delta.insert(item.text.as_str(), Attributes::new());
            return;
        }
    };

    // Byte offset of every char boundary, so char offsets can index the string.
    let boundaries: Vec<usize> = item
        .text
        .char_indices()
        .map(|(index, _)| index)
        .chain([item.text.len()])
        .collect();
    let length = boundaries.len() - 1;
    let byte = |offset: usize| boundaries[offset.min(length)];

    let points = split_points(length, ranges);
    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let piece = &item.text[byte(start)..byte(end)];
        delta.insert(piece, inline_attributes(covering(ranges, start, end)));
    }
}

fn inline_attributes<'a>(ranges: impl Iterator<Item = &'a FormattingRange>) -> Attributes {
    let mut attributes = Attributes::new();
    for range in ranges {
        match (&range.kind, &range.hex, &range.url) {
            (Some(FormattingType::Bold), _, _) => attributes.set(BOLD, true),
            (Some(FormattingType::Italic), _, _) => attributes.set(ITALIC, true),
            (Some(FormattingType::Color), Some(hex), _) => attributes.set(COLOR, hex.as_str()),
            (Some(FormattingType::Link), _, Some(url)) => attributes.set(LINK, url.as_str()),
            _ => {}
        }
    }
    attributes
}

/// Block formatting for the newline closing a text item.
fn block_attributes(item: &TextContent) -> Attributes {
    match &item.subtype {
        Some(TextSubtype::Heading1) => Attributes::new().with(HEADER, 1),
        Some(TextSubtype::Heading2) => Attributes::new().with(HEADER, 2),
        Some(TextSubtype::Indented) => {
            let mut attributes = Attributes::new().with(BLOCKQUOTE, true);
            if let Some(level) = item.indent_level.filter(|level| *level > 0) {
                attributes.set(INDENT, level);
            }
            attributes
        }
        Some(TextSubtype::OrderedListItem) => {
            Attributes::new().with(LIST, ListKind::Ordered.as_str())
        }
        Some(TextSubtype::UnorderedListItem) => {
            Attributes::new().with(LIST, ListKind::Bullet.as_str())
        }
        Some(TextSubtype::Other(_)) | None => Attributes::new(),
    }
}
