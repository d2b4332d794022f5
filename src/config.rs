//! Runtime configuration assembled from command line arguments.

use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};
use derive_builder::Builder;

pub const DEFAULT_PRINT_WIDTH: u16 = 100;
pub const MIN_PRINT_WIDTH: u16 = 40;

/// Reports whether stdout supports 24-bit color.
pub fn detect_true_color() -> bool {
    match supports_color::on(supports_color::Stream::Stdout) {
        Some(support) => support.has_16m,
        _ => false,
    }
}

/// Application configuration. Nothing here affects the initial theme or
/// tab; those always start as light / projects.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct Config {
    /// Log at debug level instead of info
    #[builder(default)]
    pub debug: bool,
    /// File receiving log output. The TUI owns the terminal, so without a
    /// file nothing is logged while it runs.
    #[builder(default)]
    pub log_file: Option<PathBuf>,
    /// Use tailwind true color palettes rather than basic terminal colors
    #[builder(default = "detect_true_color()")]
    pub true_color_enabled: bool,
    /// Print the page once as plain text instead of launching the TUI
    #[builder(default)]
    pub print: bool,
    /// Column width used when printing
    #[builder(default = "DEFAULT_PRINT_WIDTH")]
    pub print_width: u16,
}

impl ConfigBuilder {
    pub fn build(&self) -> Result<Config> {
        let config = self._build()?;

        if config.print_width < MIN_PRINT_WIDTH {
            return Err(eyre!(
                "print width must be at least {MIN_PRINT_WIDTH} columns, got {}",
                config.print_width
            ));
        }

        Ok(config)
    }
}

impl Config {
    /// Returns a new instance of ConfigBuilder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Level used for whichever logger gets installed.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
