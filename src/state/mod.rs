//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures (data.rs)
//! - The cross-page selection (selection.rs)
//! - Page index, total count and in-flight fetch tracking (pagination.rs)

pub mod data;
pub mod pagination;
pub mod selection;
