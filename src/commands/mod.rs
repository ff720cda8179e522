//! CLI command implementations
//!
//! This module contains the command line definition, the commands
//! supported by the CLI application using the Command pattern, and the
//! reporting of their outcome.

pub mod cli;
pub mod command_traits;
pub mod compare_command;
pub mod report;

pub use cli::build_cli;
pub use command_traits::Command;
pub use compare_command::CompareCommand;
pub use report::report;
