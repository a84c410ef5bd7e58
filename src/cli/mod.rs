//! CLI module
//!
//! Command-line entry point: resolve the configuration, open the log file,
//! drain the fetcher and turn the outcome into an exit status.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{RunSummary, Runner};
