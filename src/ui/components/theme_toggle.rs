//! Button flipping between the light and dark palettes.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

pub const TOGGLE_WIDTH: u16 = 5;
pub const TOGGLE_HEIGHT: u16 = 3;

pub const SUN: &str = "☀";
pub const MOON: &str = "☾";

/// Shows the sun while dark (switch to light) and the moon while light.
pub struct ThemeToggle {
    is_dark: bool,
}

impl ThemeToggle {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_dark { SUN } else { MOON }
    }
}

impl CustomWidget for ThemeToggle {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(colors.border_color));

        Paragraph::new(self.glyph())
            .style(
                Style::new()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .centered()
            .block(block)
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./theme_toggle_tests.rs"]
mod tests;
