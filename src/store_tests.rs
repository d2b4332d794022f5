use crate::store::{reducer::StoreReducer, state::Tab};

use super::*;

#[test]
fn test_new() {
    let store = Store::new(State::default(), StoreReducer::boxed());
    let state = store.get_state();
    assert!(!state.is_dark);
    assert_eq!(state.tab, Tab::Projects);
}

#[test]
fn test_dispatch_updates_state() {
    let store = Store::new(State::default(), StoreReducer::boxed());

    store.dispatch(Action::ToggleTheme);
    store.dispatch(Action::SelectTab(Tab::Skills));

    let state = store.get_state();
    assert!(state.is_dark);
    assert_eq!(state.tab, Tab::Skills);
}

#[test]
fn test_previous_snapshot_is_untouched() {
    let store = Store::new(State::default(), StoreReducer::boxed());
    let before = store.get_state();

    store.dispatch(Action::ToggleTheme);

    assert!(!before.is_dark);
    assert!(store.get_state().is_dark);
}

#[test]
fn test_dispatch_delegates_to_reducer() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::SelectTab(Tab::Skills))
        .times(1)
        .returning(|state, _| state.tab = Tab::Skills);

    let store = Store::new(State::default(), Box::new(reducer));
    store.dispatch(Action::SelectTab(Tab::Skills));

    assert_eq!(store.get_state().tab, Tab::Skills);
}
