//! Pixel coordinate within a raster grid

use std::collections::BTreeSet;
use std::fmt;

/// Position of one sample in a grid
///
/// Single-channel grids produce 2-D coordinates (`channel` is `None`),
/// multi-channel grids produce 3-D coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index (first axis)
    pub row: u32,
    /// Column index (second axis)
    pub col: u32,
    /// Channel index for multi-channel grids
    pub channel: Option<u32>,
}

impl Coordinate {
    /// Create a new 2D coordinate
    pub fn new(row: u32, col: u32) -> Self {
        Coordinate { row, col, channel: None }
    }

    /// Create a new 3D coordinate with a channel axis
    pub fn with_channel(row: u32, col: u32, channel: u32) -> Self {
        Coordinate { row, col, channel: Some(channel) }
    }

    /// Number of axes in this coordinate (2 or 3)
    pub fn axis_count(&self) -> usize {
        if self.channel.is_some() { 3 } else { 2 }
    }

    /// Components in fixed axis order: row, column, then channel
    pub fn components(&self) -> Vec<u32> {
        let mut components = vec![self.row, self.col];
        if let Some(channel) = self.channel {
            components.push(channel);
        }
        components
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel {
            Some(channel) => write!(f, "({}, {}, {})", self.row, self.col, channel),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Set of coordinates, iterated in row-major order
pub type CoordinateSet = BTreeSet<Coordinate>;
