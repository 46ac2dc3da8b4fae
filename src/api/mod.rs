//! Catalog API module
//!
//! This module handles everything that talks to the remote catalog:
//! - Page requests and response decoding (client.rs)

pub mod client;
