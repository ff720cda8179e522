//! Raster decoding module
//!
//! This module provides the decoded grid type and the reader that
//! builds it from image files.

pub mod errors;
pub mod grid;
pub mod reader;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{RasterError, RasterResult};
pub use grid::{GridSamples, GridShape, RasterGrid};
pub use reader::{grid_from_image, GridReader};
