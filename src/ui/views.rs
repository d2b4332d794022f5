//! View implementations for the portfolio screen.

pub mod portfolio;
pub mod traits;
