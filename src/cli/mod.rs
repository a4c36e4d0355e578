//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Dispatching a parsed command to the engine client
//! - Console rendering of result tables

mod args;
mod commands;
mod output;

pub use args::{Cli, Command};
pub use commands::dispatch;
pub use output::{OutputFormat, OutputFormatter, NO_RESULTS};
