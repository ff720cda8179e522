//! Command pattern interfaces
//!
//! This module defines the core Command pattern interface
//! for the CLI application.

use crate::raster::errors::RasterResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// The line reported to the user on success, or an error
    fn execute(&self) -> RasterResult<String>;
}
