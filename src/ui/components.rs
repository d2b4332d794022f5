//! Reusable UI components (header, tabs, panels, footer, etc.).

pub mod footer;
pub mod header;
pub mod project_list;
pub mod scrollbar;
pub mod scrollview;
pub mod skill_list;
pub mod tabs;
pub mod tags;
pub mod text;
pub mod theme_toggle;
