//! Scrollable view over pre-laid-out lines.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, ScrollbarState, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

use super::scrollbar::ScrollBar;

/// Columns reserved on the right for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Scrollable list of lines with a scrollbar when content overflows.
pub struct ScrollView {
    lines: Vec<Line<'static>>,
    offset: usize,
}

impl ScrollView {
    /// Creates a new scroll-view over `lines`, scrolled down by `offset`.
    pub fn new(lines: Vec<Line<'static>>, offset: usize) -> Self {
        Self { lines, offset }
    }
}

impl CustomStatefulWidget for ScrollView {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        // main view + right aligned scrollbar
        let [content_area, scroll_bar_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(SCROLLBAR_WIDTH),
        ])
        .areas(area);

        let overflowing = self.lines.len() > area.height as usize;
        let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);

        Paragraph::new(self.lines)
            .scroll((offset, 0))
            .render(content_area, buf);

        if overflowing {
            ScrollBar::new().render(scroll_bar_area, buf, state, ctx);
        }
    }
}

#[cfg(test)]
#[path = "./scrollview_tests.rs"]
mod tests;
