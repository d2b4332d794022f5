//! Rendering and event traits shared by views and components.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, layout::Rect};

use crate::store::{Dispatcher, state::State};

/// Context handed to event handlers.
pub struct CustomEventContext<'a> {
    // app state at the time the event was read
    pub state: &'a State,
    // the only way views may change state
    pub dispatcher: Rc<dyn Dispatcher>,
}

/// Context handed to widgets while rendering.
pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
}

pub trait EventHandler {
    /// Returns `Ok(true)` when the event was consumed.
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool>;
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {}
