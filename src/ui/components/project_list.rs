//! Projects panel: one card per project, in stored order.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{
    content::Project,
    ui::colors::Colors,
};

use super::{tags::tag_lines, text::wrap_words};

const GUTTER: &str = "▌ ";
const GUTTER_WIDTH: usize = 2;

/// Lays out projects as gutter-marked cards: title, description, skill tags
/// and link.
pub struct ProjectList<'a> {
    projects: &'a [Project],
}

impl<'a> ProjectList<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects }
    }

    /// Produces the panel lines for a content area `width` columns wide.
    pub fn lines(&self, width: usize, colors: &Colors) -> Vec<Line<'static>> {
        let inner_width = width.saturating_sub(GUTTER_WIDTH);
        let gutter = Span::styled(GUTTER, Style::new().fg(colors.accent));
        let text = Style::new().fg(colors.text);
        let tag = Style::new().bg(colors.tag_bg).fg(colors.tag_fg);

        let card_line = |spans: Vec<Span<'static>>| {
            let mut line = vec![gutter.clone()];
            line.extend(spans);
            Line::from(line)
        };

        let mut lines = Vec::new();

        for (i, project) in self.projects.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }

            lines.push(card_line(vec![Span::styled(
                project.title,
                text.add_modifier(Modifier::BOLD),
            )]));

            for row in wrap_words(project.description, inner_width) {
                lines.push(card_line(vec![Span::styled(row, text)]));
            }

            lines.push(card_line(vec![]));

            for row in tag_lines(project.skills, inner_width, tag) {
                lines.push(card_line(row));
            }

            lines.push(card_line(vec![Span::styled(
                format!("↗ {}", project.link),
                Style::new().fg(colors.link).add_modifier(Modifier::UNDERLINED),
            )]));
        }

        lines
    }
}

#[cfg(test)]
#[path = "./project_list_tests.rs"]
mod tests;
