//! Terminal UI (TUI) portfolio page
//!
//! Renders a personal portfolio: profile header, a projects / skills tab
//! switcher, a light / dark theme toggle and contact links.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! folio --help
//!
//! # launch application
//! folio
//!
//! # print the page as plain text and exit
//! folio --print --width 80
//! ```

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use ratatui::{Terminal, prelude::CrosstermBackend};
use simplelog::{SharedLogger, WriteLogger};
use std::{fs::File, io, path::PathBuf, rc::Rc};

use crate::{
    config::{Config, DEFAULT_PRINT_WIDTH},
    renderer::Renderer,
    store::{StateGetter, Store, reducer::StoreReducer, state::State},
    ui::{app::App, plain},
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod content;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Write logs to this file
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Use basic terminal colors even if true color is supported
    #[arg(long, default_value_t = false)]
    no_true_color: bool,

    /// Print the page once as plain text and exit
    #[arg(short, long, default_value_t = false)]
    print: bool,

    /// Column width used with --print
    #[arg(short, long, default_value_t = DEFAULT_PRINT_WIDTH)]
    width: u16,
}

#[doc(hidden)]
fn create_config(args: &Args) -> Result<Config> {
    let mut builder = Config::builder();

    builder
        .debug(args.debug)
        .log_file(args.log_file.clone())
        .print(args.print)
        .print_width(args.width);

    if args.no_true_color {
        builder.true_color_enabled(false);
    }

    builder.build()
}

/// Returns a file logger when a log file is configured, otherwise none since
/// the terminal is reserved for the page.
#[doc(hidden)]
fn create_logger(config: &Config) -> Result<Option<Box<dyn SharedLogger>>> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let logger: Box<dyn SharedLogger> =
        WriteLogger::new(config.log_level(), simplelog::Config::default(), file);

    Ok(Some(logger))
}

#[doc(hidden)]
fn initialize_logger(config: &Config) -> Result<()> {
    if let Some(logger) = create_logger(config)? {
        simplelog::CombinedLogger::init(vec![logger])?;
    }
    Ok(())
}

#[doc(hidden)]
fn init(config: &Config) -> Store {
    Store::new(State::new(config.true_color_enabled), StoreReducer::boxed())
}

#[doc(hidden)]
fn print_page(config: &Config, store: &Store) -> Result<()> {
    let state = store.get_state();
    let lines = plain::render_page(&App::new(), &state, config.print_width)?;
    log::debug!("printing {} lines at width {}", lines.len(), config.print_width);
    println!("{}", lines.join("\n"));
    Ok(())
}

#[doc(hidden)]
fn start_renderer(store: Store) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).wrap_err("failed to create terminal")?;
    let renderer = Renderer::new(terminal, Rc::new(store));
    renderer.start_render_loop()
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = create_config(&args)?;

    initialize_logger(&config)?;
    log::info!("starting folio with {:?}", config);

    let store = init(&config);

    if config.print {
        return print_page(&config, &store);
    }

    start_renderer(store)
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
