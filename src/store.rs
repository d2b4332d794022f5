//! Redux-like state container for the portfolio page.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::store::{action::Action, state::State};

pub mod action;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action);
}

/// Centralized state container. Sole owner of the theme and tab state.
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
}

impl Store {
    /// Creates a new store from the initial state and the reducer that
    /// applies actions to it.
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            reducer,
            state: RefCell::new(Rc::new(initial_state)),
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let mut rc = self.state.borrow_mut();
        let state = Rc::make_mut(&mut rc);
        self.reducer.reduce(state, action);
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
