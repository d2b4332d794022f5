//! Terminal UI components, views, and plain-text rendering.

pub mod app;
pub mod colors;
pub mod components;
pub mod plain;
pub mod views;
