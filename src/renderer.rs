//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture,
            Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::{cell::RefCell, io, rc::Rc};

use crate::{
    store::{Dispatcher, StateGetter, Store, state::State},
    ui::{
        app::{App, Application},
        views::traits::{CustomEventContext, CustomWidgetContext},
    },
};

const POLL_INTERVAL: time::Duration = time::Duration::from_millis(50);

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Owns the terminal and the store, draws frames and routes input.
pub struct Renderer<B: Backend> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
}

impl<B: Backend> Renderer<B> {
    /// Creates a new renderer drawing the portfolio app to `terminal`.
    pub fn new(terminal: Terminal<B>, store: Rc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            store,
            app: Box::new(App::new()),
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        run_restoring(
            || self.enable_terminal_raw_mode(),
            || self.start_loop(),
            || self.exit(),
        )
    }

    fn start_loop(&self) -> Result<()> {
        log::info!("starting render loop");

        self.render_frame(&self.store.get_state())?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let evt = event::read()?;

            if self.handle_event(&evt)? == LoopControl::Quit {
                log::info!("quit requested");
                return Ok(());
            }

            self.render_frame(&self.store.get_state())?;
        }
    }

    /// Routes one input event through the app, falling back to the global
    /// quit bindings when the app does not consume it.
    pub fn handle_event(&self, evt: &CrossTermEvent) -> Result<LoopControl> {
        let state = self.store.get_state();

        // do not allow overriding ctrl-c
        if let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers == KeyModifiers::CONTROL
        {
            return Ok(LoopControl::Quit);
        }

        let ctx = CustomEventContext {
            state: &state,
            dispatcher: self.store.clone() as Rc<dyn Dispatcher>,
        };

        let handled = self.app.process_event(evt, &ctx)?;

        if !handled
            && let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            return Ok(LoopControl::Quit);
        }

        Ok(LoopControl::Continue)
    }

    /// Draws one frame for `state`.
    pub fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                };

                if let Err(err) =
                    self.app.render_ref(f.area(), f.buffer_mut(), &ctx)
                {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .wrap_err("failed to enter alternate screen")?;
        self.terminal
            .borrow_mut()
            .hide_cursor()
            .map_err(|e| eyre!("failed to hide terminal cursor: {}", e))?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal
            .borrow_mut()
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

/// Runs `session` once `setup` succeeds, then always runs `restore`, even
/// when `setup` failed part way through. The first error is returned.
fn run_restoring<T>(
    setup: impl FnOnce() -> Result<()>,
    session: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = setup().and_then(|_| session());
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
