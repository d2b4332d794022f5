//! Profile header: avatar placeholder, name, title and tagline.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::{
    content::Profile,
    ui::views::traits::{CustomWidget, CustomWidgetContext},
};

use super::text::{row_count, wrap_words};

// avatar row, the blank row above the tagline and the spacer below it
const DECORATION_ROWS: u16 = 3;

/// Centered identity block at the top of the page.
pub struct ProfileHeader<'a> {
    profile: &'a Profile,
}

impl<'a> ProfileHeader<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Initials drawn in place of the profile image.
    pub fn initials(&self) -> String {
        self.profile
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Rows needed to show every line of the header `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        let [name, title, tagline] = self.wrapped(width);
        DECORATION_ROWS
            .saturating_add(row_count(&name))
            .saturating_add(row_count(&title))
            .saturating_add(row_count(&tagline))
    }

    fn wrapped(&self, width: u16) -> [Vec<String>; 3] {
        let width = width as usize;
        [
            wrap_words(self.profile.name, width),
            wrap_words(self.profile.title, width),
            wrap_words(self.profile.tagline, width),
        ]
    }
}

impl CustomWidget for ProfileHeader<'_> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let bold = Style::new().fg(colors.text).add_modifier(Modifier::BOLD);

        let [name, title, tagline] = self.wrapped(area.width);

        let mut lines = vec![Line::styled(
            format!("[ {} ]", self.initials()),
            Style::new().fg(colors.accent).add_modifier(Modifier::BOLD),
        )];
        lines.extend(name.into_iter().map(|row| Line::styled(row, bold)));
        lines.extend(title.into_iter().map(|row| Line::styled(row, bold)));
        lines.push(Line::default());
        lines.extend(
            tagline
                .into_iter()
                .map(|row| Line::styled(row, Style::new().fg(colors.text))),
        );

        Paragraph::new(lines)
            .centered()
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
