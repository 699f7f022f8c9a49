//! Command-line interface for book-minder.
//!
//! This module provides the subcommands and the interactive menu, plus the
//! presenter that formats results and validates user input.

mod commands;
pub mod present;

pub use commands::{Cli, Commands, run_command};
