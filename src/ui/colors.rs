//! Light and dark palettes for the portfolio page.

use std::fmt;

use ratatui::style::{Color, palette::tailwind};

/// Which of the two palettes is applied to the whole page.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

impl Theme {
    /// Maps the dark-mode flag onto a theme.
    pub fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }
}

/// Concrete colors for the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub page_bg: Color,
    pub text: Color,
    pub card_bg: Color,
    pub tag_bg: Color,
    pub tag_fg: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub inactive_tab_bg: Color,
    pub inactive_tab_fg: Color,
    pub border_color: Color,
    pub muted: Color,
    pub link: Color,
    pub scroll_bar_fg: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(Theme::default(), true)
    }
}

impl Colors {
    /// Creates the palette for the given theme, falling back to basic
    /// colors if true color is not supported.
    pub fn new(theme: Theme, true_color_enabled: bool) -> Self {
        match (theme, true_color_enabled) {
            (Theme::Light, true) => Self {
                page_bg: tailwind::RED.c50,
                text: Color::Black,
                card_bg: Color::White,
                tag_bg: tailwind::RED.c100,
                tag_fg: Color::Black,
                accent: tailwind::RED.c500,
                accent_fg: Color::White,
                inactive_tab_bg: tailwind::RED.c100,
                inactive_tab_fg: Color::Black,
                border_color: tailwind::RED.c200,
                muted: tailwind::GRAY.c600,
                link: tailwind::RED.c600,
                scroll_bar_fg: tailwind::RED.c400,
            },
            (Theme::Dark, true) => Self {
                page_bg: tailwind::GRAY.c900,
                text: Color::White,
                card_bg: tailwind::GRAY.c800,
                tag_bg: tailwind::GRAY.c700,
                tag_fg: Color::White,
                accent: tailwind::RED.c500,
                accent_fg: Color::White,
                inactive_tab_bg: tailwind::GRAY.c700,
                inactive_tab_fg: Color::White,
                border_color: tailwind::GRAY.c700,
                muted: tailwind::GRAY.c400,
                link: tailwind::RED.c500,
                scroll_bar_fg: tailwind::GRAY.c500,
            },
            // Fallback palettes for terminals without true color support.
            (Theme::Light, false) => Self {
                page_bg: Color::White,
                text: Color::Black,
                card_bg: Color::Gray,
                tag_bg: Color::LightRed,
                tag_fg: Color::Black,
                accent: Color::Red,
                accent_fg: Color::White,
                inactive_tab_bg: Color::LightRed,
                inactive_tab_fg: Color::Black,
                border_color: Color::LightRed,
                muted: Color::DarkGray,
                link: Color::Red,
                scroll_bar_fg: Color::Red,
            },
            (Theme::Dark, false) => Self {
                page_bg: Color::Black,
                text: Color::White,
                card_bg: Color::Black,
                tag_bg: Color::DarkGray,
                tag_fg: Color::White,
                accent: Color::Red,
                accent_fg: Color::White,
                inactive_tab_bg: Color::DarkGray,
                inactive_tab_fg: Color::White,
                border_color: Color::DarkGray,
                muted: Color::Gray,
                link: Color::LightRed,
                scroll_bar_fg: Color::Gray,
            },
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
