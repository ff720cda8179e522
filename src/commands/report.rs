//! Outcome reporting
//!
//! Every command error is caught here exactly once and turned into the
//! single line printed on stdout.

use log::error;

use crate::commands::command_traits::Command;
use crate::raster::errors::RasterResult;

/// Prefix of the line reported for a failed run
pub const FAILURE_PREFIX: &str = "Comparison failed";

/// Build and run a command, returning the line to print
///
/// # Arguments
/// * `command` - The command, or the error raised while building it
///
/// # Returns
/// The command's success line, or `Comparison failed: <message>`
pub fn report<C: Command>(command: RasterResult<C>) -> String {
    match command.and_then(|command| command.execute()) {
        Ok(line) => line,
        Err(e) => {
            error!("{}: {}", FAILURE_PREFIX, e);
            format!("{}: {}", FAILURE_PREFIX, e)
        },
    }
}
