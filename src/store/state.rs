//! Application state definitions.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::ui::colors::{Colors, Theme};

/// Content panel selector. Always exactly one of the two variants.
#[derive(Debug, Default, Display, EnumIter, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Tab {
    #[default]
    Projects,
    Skills,
}

impl Tab {
    /// Returns every tab in display order.
    pub fn all() -> Vec<Tab> {
        Tab::iter().collect()
    }

    /// Returns the tab that is not `self`.
    pub fn other(self) -> Tab {
        match self {
            Tab::Projects => Tab::Skills,
            Tab::Skills => Tab::Projects,
        }
    }
}

/// Complete application state for the portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub true_color_enabled: bool,
    pub is_dark: bool,
    pub tab: Tab,
    pub colors: Colors,
}

impl State {
    /// Creates the initial state: light theme with the projects panel.
    pub fn new(true_color_enabled: bool) -> Self {
        Self {
            true_color_enabled,
            is_dark: false,
            tab: Tab::Projects,
            colors: Colors::new(Theme::Light, true_color_enabled),
        }
    }

    /// Returns the theme selected by the dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.is_dark)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
