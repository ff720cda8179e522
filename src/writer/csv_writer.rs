//! CSV writer for changed coordinates
//!
//! Rows are `lat,lon,value` for 2-D coordinates and
//! `lat,lon,channel,value` when the grid has a channel axis.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::coordinate::CoordinateSet;
use crate::raster::errors::{RasterError, RasterResult};

/// Header label of the first axis
pub const LATITUDE_LABEL: &str = "lat";
/// Header label of the second axis
pub const LONGITUDE_LABEL: &str = "lon";
/// Header label of the channel axis
pub const CHANNEL_LABEL: &str = "channel";
/// Header label of the tag column
pub const VALUE_LABEL: &str = "value";

/// How `ChangeWriter::write` treats the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the file and write a header
    Create,
    /// Add rows to an existing file, no header
    Append,
}

/// Writer for one output file
pub struct ChangeWriter {
    /// Path of the CSV file
    output_path: PathBuf,
    /// Axes per coordinate (2 or 3)
    axis_count: usize,
}

impl ChangeWriter {
    /// Create a writer
    ///
    /// # Arguments
    /// * `output_path` - File receiving the rows
    /// * `axis_count` - Coordinate dimensionality, selects the header layout
    pub fn new<P: AsRef<Path>>(output_path: P, axis_count: usize) -> Self {
        ChangeWriter {
            output_path: output_path.as_ref().to_path_buf(),
            axis_count,
        }
    }

    /// Path of the output file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Header columns for this writer's dimensionality
    pub fn header(&self) -> Vec<&'static str> {
        let mut columns = vec![LATITUDE_LABEL, LONGITUDE_LABEL];
        if self.axis_count > 2 {
            columns.push(CHANNEL_LABEL);
        }
        columns.push(VALUE_LABEL);
        columns
    }

    /// Write every coordinate as a row tagged with `tag`
    ///
    /// # Arguments
    /// * `coordinates` - Rows to write, possibly empty
    /// * `tag` - Value of the last column on every row
    /// * `mode` - Create a fresh file or append to the existing one
    ///
    /// # Returns
    /// Number of rows written. Appending without an existing file fails with
    /// `RasterError::AppendTargetMissing` and leaves no file behind.
    pub fn write(&self, coordinates: &CoordinateSet, tag: &str, mode: WriteMode) -> RasterResult<usize> {
        if let Some(bad) = coordinates.iter().find(|c| c.axis_count() != self.axis_count) {
            return Err(RasterError::GenericError(format!(
                "Coordinate {} has {} axes, output file expects {}",
                bad, bad.axis_count(), self.axis_count
            )));
        }

        let file = match mode {
            WriteMode::Create => File::create(&self.output_path)?,
            WriteMode::Append => {
                if !self.output_path.exists() {
                    return Err(RasterError::AppendTargetMissing(self.output_path.clone()));
                }
                OpenOptions::new().append(true).open(&self.output_path)?
            },
        };
        let mut writer = BufWriter::new(file);

        if mode == WriteMode::Create {
            writeln!(writer, "{}", self.header().join(","))?;
        }

        for coordinate in coordinates {
            for component in coordinate.components() {
                write!(writer, "{},", component)?;
            }
            writeln!(writer, "{}", tag)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows tagged {} ({:?})", coordinates.len(), tag, mode);
        info!("{} rows written to {}", coordinates.len(), self.output_path.display());
        Ok(coordinates.len())
    }
}
