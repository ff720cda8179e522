//! Decoded raster grid
//!
//! A `RasterGrid` holds the samples of one decoded image in row-major,
//! channel-interleaved order together with its shape.

use std::fmt;

use log::debug;

use crate::coordinate::{Coordinate, CoordinateSet};
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::progress::ProgressTracker;

/// Dimensions of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of rows
    pub height: u32,
    /// Number of columns
    pub width: u32,
    /// Samples per pixel
    pub channels: u32,
}

impl GridShape {
    /// Create a new shape
    pub fn new(height: u32, width: u32, channels: u32) -> Self {
        GridShape { height, width, channels }
    }

    /// Axis count of the coordinates this grid produces
    ///
    /// Single-channel grids are 2-D, everything else carries a channel axis.
    pub fn axis_count(&self) -> usize {
        if self.channels > 1 { 3 } else { 2 }
    }

    /// Total number of samples
    pub fn sample_count(&self) -> usize {
        self.height as usize * self.width as usize * self.channels as usize
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.channels > 1 {
            write!(f, "{}x{}x{}", self.height, self.width, self.channels)
        } else {
            write!(f, "{}x{}", self.height, self.width)
        }
    }
}

/// Sample storage, one variant per supported element type
#[derive(Debug, Clone)]
pub enum GridSamples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl GridSamples {
    /// Name of the element type
    pub fn element_type(&self) -> &'static str {
        match self {
            GridSamples::U8(_) => "u8",
            GridSamples::U16(_) => "u16",
            GridSamples::F32(_) => "f32",
        }
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        match self {
            GridSamples::U8(v) => v.len(),
            GridSamples::U16(v) => v.len(),
            GridSamples::F32(v) => v.len(),
        }
    }

    /// Whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Largest integer magnitude an f32 represents exactly
const F32_EXACT_INTEGER_LIMIT: u64 = 1 << 24;

/// Immutable decoded image grid
#[derive(Debug, Clone)]
pub struct RasterGrid {
    shape: GridShape,
    samples: GridSamples,
}

impl RasterGrid {
    /// Create a grid from raw samples
    ///
    /// # Arguments
    /// * `shape` - Grid dimensions
    /// * `samples` - Samples in row-major, channel-interleaved order
    ///
    /// # Returns
    /// The grid, or an error if the sample count does not match the shape
    pub fn new(shape: GridShape, samples: GridSamples) -> RasterResult<Self> {
        if samples.len() != shape.sample_count() {
            return Err(RasterError::GenericError(format!(
                "Grid of shape {} needs {} samples, got {}",
                shape, shape.sample_count(), samples.len()
            )));
        }

        Ok(RasterGrid { shape, samples })
    }

    /// Grid dimensions
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Element type of the samples
    pub fn element_type(&self) -> &'static str {
        self.samples.element_type()
    }

    /// Find every position holding the target value
    ///
    /// The target is converted into the grid's element type before the scan.
    /// Values that cannot be represented in that type are a type mismatch
    /// rather than an empty result.
    ///
    /// # Arguments
    /// * `target` - Value to look for
    /// * `progress` - Tracker advanced once per scanned row
    ///
    /// # Returns
    /// Coordinates of all matching samples
    pub fn find_value(&self, target: i64, progress: &ProgressTracker) -> RasterResult<CoordinateSet> {
        let mismatch = || RasterError::TypeMismatch {
            target,
            element_type: self.samples.element_type(),
        };

        let found = match &self.samples {
            GridSamples::U8(samples) => {
                let value = u8::try_from(target).map_err(|_| mismatch())?;
                scan(samples, value, self.shape, progress)
            },
            GridSamples::U16(samples) => {
                let value = u16::try_from(target).map_err(|_| mismatch())?;
                scan(samples, value, self.shape, progress)
            },
            GridSamples::F32(samples) => {
                if target.unsigned_abs() > F32_EXACT_INTEGER_LIMIT {
                    return Err(mismatch());
                }
                scan(samples, target as f32, self.shape, progress)
            },
        };

        debug!("Found {} samples equal to {} in {} grid", found.len(), target, self.shape);
        Ok(found)
    }
}

/// Dense row-by-row scan collecting matching positions
fn scan<T: PartialEq + Copy>(samples: &[T], target: T, shape: GridShape,
                             progress: &ProgressTracker) -> CoordinateSet {
    let mut found = CoordinateSet::new();
    let channels = shape.channels.max(1) as usize;
    let row_len = shape.width as usize * channels;
    if row_len == 0 {
        return found;
    }

    for (row, row_samples) in samples.chunks(row_len).enumerate() {
        for (offset, sample) in row_samples.iter().enumerate() {
            if *sample != target {
                continue;
            }

            let col = (offset / channels) as u32;
            let coordinate = if shape.channels > 1 {
                Coordinate::with_channel(row as u32, col, (offset % channels) as u32)
            } else {
                Coordinate::new(row as u32, col)
            };
            found.insert(coordinate);
        }
        progress.increment(1);
    }

    found
}
