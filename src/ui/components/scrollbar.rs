//! Track beside the projects / skills panel showing how far it is
//! scrolled.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// Vertical bar without end arrows, drawn in the theme's scroll color.
pub struct ScrollBar {}

impl ScrollBar {
    pub fn new() -> Self {
        Self {}
    }
}

impl CustomStatefulWidget for ScrollBar {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        if area.width < 1 || area.height < 1 {
            return;
        }

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::new().fg(ctx.state.colors.scroll_bar_fg));

        scrollbar.render(area, buf, state)
    }
}
