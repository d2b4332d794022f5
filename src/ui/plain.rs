//! Renders the widget tree into plain text rows, for headless output.

use color_eyre::eyre::Result;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::store::state::State;

use super::{app::Application, views::traits::CustomWidgetContext};

/// Concatenates each buffer row's symbols, trimming trailing blanks.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width).max(1);

    buf.content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Draws `app` for `state` into an off-screen buffer of the given width,
/// tall enough that nothing scrolls.
pub fn render_page(
    app: &dyn Application,
    state: &State,
    width: u16,
) -> Result<Vec<String>> {
    let height = app.natural_height(state, width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);

    let ctx = CustomWidgetContext {
        state,
    };

    app.render_ref(area, &mut buf, &ctx)?;

    Ok(buffer_lines(&buf))
}

#[cfg(test)]
#[path = "./plain_tests.rs"]
mod tests;
