//! Tab switcher between the projects and skills panels.

use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    store::state::Tab,
    ui::views::traits::{CustomWidget, CustomWidgetContext},
};

pub const TABS_HEIGHT: u16 = 3;

const BUTTON_PADDING: u16 = 4;
const BUTTON_SPACING: u16 = 2;

/// Row of bordered tab buttons with the active one highlighted.
pub struct TabSwitcher {
    active: Tab,
}

impl TabSwitcher {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    /// Computes where each tab button is drawn inside `area`. Also used for
    /// mouse hit testing.
    pub fn button_areas(area: Rect) -> Vec<(Tab, Rect)> {
        let tabs = Tab::all();

        let widths = tabs.iter().map(|tab| {
            let label_width = u16::try_from(tab.to_string().width()).unwrap_or(u16::MAX);
            Constraint::Length(label_width.saturating_add(BUTTON_PADDING))
        });

        let rects: Rc<[Rect]> = Layout::horizontal(widths)
            .flex(Flex::Center)
            .spacing(BUTTON_SPACING)
            .split(area);

        tabs.into_iter().zip(rects.iter().copied()).collect()
    }
}

impl CustomWidget for TabSwitcher {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        for (tab, button_area) in Self::button_areas(area) {
            let style = if tab == self.active {
                Style::new()
                    .bg(colors.accent)
                    .fg(colors.accent_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new()
                    .bg(colors.inactive_tab_bg)
                    .fg(colors.inactive_tab_fg)
            };

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style);

            Paragraph::new(tab.to_string())
                .style(style)
                .centered()
                .block(block)
                .render(button_area, buf);
        }
    }
}

#[cfg(test)]
#[path = "./tabs_tests.rs"]
mod tests;
