//! Pill-style tags for skills, laid out into width-bounded lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::text::pack_rows;

const TAG_GAP: &str = " ";

/// Lays out `items` as padded tags, preserving their order, starting a new
/// line whenever the next tag would overflow `width`.
pub fn tag_lines(
    items: &[&'static str],
    width: usize,
    style: Style,
) -> Vec<Vec<Span<'static>>> {
    let tags = items.iter().map(|item| format!(" {item} "));

    pack_rows(tags, TAG_GAP.len(), width, |tag| tag.width())
        .into_iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, tag) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(TAG_GAP));
                }
                spans.push(Span::styled(tag, style));
            }
            spans
        })
        .collect()
}

/// Convenience wrapper turning each laid-out row into a [`Line`].
pub fn tag_rows(
    items: &[&'static str],
    width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    tag_lines(items, width, style)
        .into_iter()
        .map(Line::from)
        .collect()
}

#[cfg(test)]
#[path = "./tags_tests.rs"]
mod tests;
