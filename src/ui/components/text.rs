//! Width-aware wrapping for pre-laid-out page text.

use unicode_width::UnicodeWidthStr;

/// Groups `items` into rows at most `width` columns wide, keeping their
/// order. Neighbours on a row are `gap` columns apart and `measure` gives
/// the width of a single item.
///
/// An item wider than `width` gets a row of its own and is clipped when
/// drawn.
pub fn pack_rows<T>(
    items: impl IntoIterator<Item = T>,
    gap: usize,
    width: usize,
    measure: impl Fn(&T) -> usize,
) -> Vec<Vec<T>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut current_width = 0;

    for item in items {
        let item_width = measure(&item);

        if !current.is_empty() && current_width + gap + item_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if !current.is_empty() {
            current_width += gap;
        }

        current_width += item_width;
        current.push(item);
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

/// Breaks `text` into lines no wider than `width` display columns.
///
/// Words are never split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    pack_rows(text.split_whitespace(), 1, width, |word| word.width())
        .into_iter()
        .map(|row| row.join(" "))
        .collect()
}

/// Number of rows `lines` occupies, saturating at `u16::MAX`.
pub fn row_count<T>(lines: &[T]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "./text_tests.rs"]
mod tests;
