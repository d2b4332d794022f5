//! Root of the widget tree handed to the renderer.

use color_eyre::eyre::Result;
use ratatui::{crossterm::event::Event, layout::Rect};

use crate::store::state::State;

use super::views::{
    portfolio::PortfolioView,
    traits::{
        CustomEventContext, CustomWidgetContext, CustomWidgetRef, EventHandler,
        View,
    },
};

/// Anything the renderer can draw and feed events to.
pub trait Application: CustomWidgetRef + EventHandler {
    /// Rows needed to draw everything at `width` without scrolling.
    fn natural_height(&self, state: &State, width: u16) -> u16;
}

/// The portfolio application.
#[derive(Default)]
pub struct App {
    portfolio: PortfolioView,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    fn main_view(&self) -> &dyn View {
        &self.portfolio
    }
}

impl Application for App {
    fn natural_height(&self, state: &State, width: u16) -> u16 {
        self.portfolio.natural_height(state, width)
    }
}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        self.main_view().render_ref(area, buf, ctx)
    }
}

impl EventHandler for App {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool> {
        self.main_view().process_event(evt, ctx)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
