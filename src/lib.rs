pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod test_utils;
pub mod tui;
pub mod views;

pub use error::{Result, SksError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
