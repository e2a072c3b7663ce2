/// The current version of logview, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod reader;

pub use display::{build_log_for_display, DisplayLog};
pub use error::LogError;
