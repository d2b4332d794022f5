//! UI state reducers for the theme flag and the active tab.

use crate::{
    store::state::{State, Tab},
    ui::colors::Colors,
};

/// Flips dark mode and swaps the palette to match.
pub fn toggle_theme(state: &mut State) {
    state.is_dark = !state.is_dark;
    state.colors = Colors::new(state.theme(), state.true_color_enabled);
}

/// Makes `tab` the active panel. Selecting the active tab changes nothing.
pub fn select_tab(state: &mut State, tab: Tab) {
    state.tab = tab;
}
