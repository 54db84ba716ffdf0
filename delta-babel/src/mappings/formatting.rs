//! Flat formatting ranges over a text run.
//!
//! ```text
//!     NPF stores inline styling as `[start, end)` annotations over a block's text instead of as
//!     attributes on runs. Two helpers live here:
//!
//!     - [merge_formatting] coalesces equivalent ranges that touch or overlap, so a bold run
//!       split across several delta ops comes out as one annotation.
//!     - [split_points] finds the boundaries at which the set of active ranges can change, which
//!       is what the reverse direction slices a text item at.
//! ```

use crate::formats::npf::model::{FormattingRange, FormattingType};

/// Whether two ranges carry the same formatting.
///
/// Types must match, and for the typed variants that carry a payload the payload must match too:
/// links by `url`, colours by `hex`, mentions by `blog.uuid`. Type-less ranges compare by the
/// colour they paint.
pub fn equivalent(a: &FormattingRange, b: &FormattingRange) -> bool {
    if a.kind != b.kind {
        return false;
    }
    match &a.kind {
        Some(FormattingType::Link) => a.url == b.url,
        Some(FormattingType::Color) => a.hex == b.hex,
        Some(FormattingType::Mention) => {
            a.blog.as_ref().map(|blog| &blog.uuid) == b.blog.as_ref().map(|blog| &blog.uuid)
        }
        Some(_) => true,
        None => a.color == b.color,
    }
}

/// Coalesces equivalent ranges in place.
///
/// For each range, any later equivalent range that starts at or before its end is folded into it
/// (the end is extended to the larger of the two) and removed. Earlier ranges keep their position.
pub fn merge_formatting(ranges: &mut Vec<FormattingRange>) {
    let mut i = 0;
    while i < ranges.len() {
        let mut j = i + 1;
        while j < ranges.len() {
            if ranges[j].start <= ranges[i].end && equivalent(&ranges[i], &ranges[j]) {
                let absorbed = ranges.remove(j);
                ranges[i].end = ranges[i].end.max(absorbed.end);
            } else {
                j += 1;
            }
        }
        i += 1;
    }
}

/// Sorted, de-duplicated slice boundaries for a text of `len` characters.
///
/// Always contains `0` and `len`, plus every range start and end.
pub fn split_points(len: usize, ranges: &[FormattingRange]) -> Vec<usize> {
    let mut points: Vec<usize> = ranges
        .iter()
        .flat_map(|range| [range.start, range.end])
        .chain([0, len])
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// The ranges that fully cover `[start, end)`.
pub fn covering(
    ranges: &[FormattingRange],
    start: usize,
    end: usize,
) -> impl Iterator<Item = &FormattingRange> {
    ranges
        .iter()
        .filter(move |range| range.start <= start && range.end >= end)
}
