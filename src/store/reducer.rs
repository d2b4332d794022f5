//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, state::State};

mod reducers;

/// Applies actions to state in place.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place.
    fn reduce(&self, state: &mut State, action: Action) {
        match action {
            Action::ToggleTheme => {
                self.log_action("ToggleTheme", &state.is_dark);
                reducers::ui::toggle_theme(state);
                log::debug!("theme is now {}", state.theme());
            }
            Action::SelectTab(tab) => {
                self.log_action("SelectTab", &tab);
                reducers::ui::select_tab(state, tab);
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
