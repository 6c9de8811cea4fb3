//! # dlpscope CLI
//!
//! Argument parsing, command dispatch and logging setup for the `dlpscope`
//! binary. The binary itself only handles exit codes and stdout/stderr.

pub mod args;
pub mod commands;
pub mod logging;

pub use args::{Cli, Command};
pub use commands::{load_table, run};
