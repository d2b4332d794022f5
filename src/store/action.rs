//! Action types for state transitions.

use super::state::Tab;

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    ToggleTheme,
    SelectTab(Tab),
}
