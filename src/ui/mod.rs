//! User interface module
//!
//! View functions for each part of the window:
//! - Artworks table with per-row and whole-page checkboxes (table.rs)
//! - Page navigation bar (pager.rs)
//! - Selected artworks side panel (selection_panel.rs)

pub mod pager;
pub mod selection_panel;
pub mod table;
