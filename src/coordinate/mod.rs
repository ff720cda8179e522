//! Pixel coordinates and coordinate sets
//!
//! Coordinates identify a sample position inside a decoded raster grid.

mod pixel;

// Re-export key types
pub use self::pixel::{Coordinate, CoordinateSet};
