//! Skills panel: each category label followed by its tags.

use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::{content::SkillCategory, ui::colors::Colors};

use super::tags::tag_rows;

pub struct SkillList<'a> {
    categories: &'a [SkillCategory],
}

impl<'a> SkillList<'a> {
    pub fn new(categories: &'a [SkillCategory]) -> Self {
        Self { categories }
    }

    /// Produces the panel lines for a content area `width` columns wide.
    pub fn lines(&self, width: usize, colors: &Colors) -> Vec<Line<'static>> {
        let label = Style::new().fg(colors.text).add_modifier(Modifier::BOLD);
        let tag = Style::new().bg(colors.tag_bg).fg(colors.tag_fg);

        let mut lines = Vec::new();

        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(category.category, label));
            lines.extend(tag_rows(category.items, width, tag));
        }

        lines
    }
}

#[cfg(test)]
#[path = "./skill_list_tests.rs"]
mod tests;
