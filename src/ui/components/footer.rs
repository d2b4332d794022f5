//! Contact links and key legend shown at the bottom of the page.

use itertools::Itertools;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    content::ContactLinks,
    ui::views::traits::{CustomWidget, CustomWidgetContext},
};

use super::text::{pack_rows, row_count};

const LINK_SEPARATOR: &str = " │ ";
const LEGEND_SEPARATOR: &str = " | ";

// rule above the links and the spacer below them
const CONTACT_DECORATION_ROWS: u16 = 2;

/// Piece of a contact link placed on a footer row. A link too wide for the
/// footer is split into its label and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPart<'a> {
    pub label: Option<&'static str>,
    pub target: Option<&'a str>,
}

impl LinkPart<'_> {
    fn width(&self) -> usize {
        match (self.label, self.target) {
            (Some(label), Some(target)) => label.width() + 1 + target.width(),
            (Some(label), None) => label.width(),
            (None, Some(target)) => target.width(),
            (None, None) => 0,
        }
    }
}

/// Email, GitHub and LinkedIn targets, separated from the content above by
/// a rule.
pub struct ContactFooter<'a> {
    contact: &'a ContactLinks,
}

impl<'a> ContactFooter<'a> {
    pub fn new(contact: &'a ContactLinks) -> Self {
        Self { contact }
    }

    /// Label and target of each link, in display order.
    pub fn links(&self) -> [(&'static str, &'a str); 3] {
        [
            ("✉ Mail", self.contact.email),
            ("GitHub", self.contact.github),
            ("LinkedIn", self.contact.linkedin),
        ]
    }

    /// Lays the links out into rows no wider than `width`, in display order.
    pub fn rows(&self, width: u16) -> Vec<Vec<LinkPart<'a>>> {
        let width = width as usize;

        let parts = self.links().into_iter().flat_map(|(label, target)| {
            let whole = LinkPart {
                label: Some(label),
                target: Some(target),
            };

            if whole.width() <= width {
                vec![whole]
            } else {
                vec![
                    LinkPart {
                        label: Some(label),
                        target: None,
                    },
                    LinkPart {
                        label: None,
                        target: Some(target),
                    },
                ]
            }
        });

        pack_rows(parts, LINK_SEPARATOR.width(), width, LinkPart::width)
    }

    /// Rows needed to show every link `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        CONTACT_DECORATION_ROWS.saturating_add(row_count(&self.rows(width)))
    }
}

impl CustomWidget for ContactFooter<'_> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let label_style = Style::new().fg(colors.text).add_modifier(Modifier::BOLD);
        let link_style = Style::new().fg(colors.link);
        let separator = Span::styled(LINK_SEPARATOR, Style::new().fg(colors.muted));

        let lines = self
            .rows(area.width)
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span> = Vec::new();
                for (i, part) in row.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(separator.clone());
                    }
                    match (part.label, part.target) {
                        (Some(label), Some(_)) => {
                            spans.push(Span::styled(format!("{label} "), label_style))
                        }
                        (Some(label), None) => spans.push(Span::styled(label, label_style)),
                        _ => {}
                    }
                    if let Some(target) = part.target {
                        spans.push(Span::styled(target, link_style));
                    }
                }
                Line::from(spans)
            })
            .collect::<Vec<_>>();

        Paragraph::new(lines)
            .centered()
            .block(
                Block::new()
                    .borders(Borders::TOP)
                    .border_style(Style::new().fg(colors.border_color)),
            )
            .render(area, buf)
    }
}

/// Centered key legend, one or more rows.
pub struct InfoFooter {
    lines: Vec<String>,
}

impl InfoFooter {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// Joins `(key, description)` pairs into a legend string.
pub fn legend_text(bindings: &[(&str, &str)]) -> String {
    bindings
        .iter()
        .map(|(key, desc)| format!("({key}) {desc}"))
        .join(LEGEND_SEPARATOR)
}

/// Splits the legend into rows no wider than `width`, never breaking a
/// single binding.
pub fn legend_lines(bindings: &[(&str, &str)], width: u16) -> Vec<String> {
    pack_rows(
        bindings.iter().copied(),
        LEGEND_SEPARATOR.width(),
        width as usize,
        // "(key) desc"
        |(key, desc)| key.width() + desc.width() + 3,
    )
    .iter()
    .map(|row| legend_text(row))
    .collect()
}

impl CustomWidget for InfoFooter {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let lines = self.lines.into_iter().map(Line::from).collect::<Vec<_>>();

        Paragraph::new(lines)
            .style(Style::new().fg(ctx.state.colors.muted))
            .centered()
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
