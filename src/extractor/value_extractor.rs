//! Target value extraction
//!
//! Decodes a raster and collects the coordinates of every sample equal
//! to a target value.

use std::path::Path;

use log::info;

use crate::coordinate::CoordinateSet;
use crate::raster::errors::RasterResult;
use crate::raster::grid::{GridShape, RasterGrid};
use crate::raster::reader::GridReader;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Coordinates found in one raster, with the shape they came from
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Shape of the scanned grid
    pub shape: GridShape,
    /// Positions holding the target value
    pub coordinates: CoordinateSet,
}

/// Extracts target value coordinates from raster files
pub struct ValueExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
    /// Draw a progress bar while scanning
    show_progress: bool,
}

impl<'a> ValueExtractor<'a> {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        ValueExtractor {
            logger,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr during scans
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Decode the raster at `path` without scanning it
    pub fn read_grid<P: AsRef<Path>>(&self, path: P) -> RasterResult<RasterGrid> {
        GridReader::new(self.logger).read(path)
    }

    /// Coordinates of all samples equal to `target` in the raster at `path`
    ///
    /// # Arguments
    /// * `path` - Image file to scan
    /// * `target` - Value to match
    ///
    /// # Returns
    /// The set of matching coordinates, or a decode / type mismatch error
    pub fn extract<P: AsRef<Path>>(&self, path: P, target: i64) -> RasterResult<CoordinateSet> {
        Ok(self.extract_with_shape(path, target)?.coordinates)
    }

    /// Like `extract`, but keeps the grid shape alongside the coordinates
    pub fn extract_with_shape<P: AsRef<Path>>(&self, path: P, target: i64) -> RasterResult<Extraction> {
        let path = path.as_ref();
        let grid = self.read_grid(path)?;
        let coordinates = self.scan_grid(&grid, target, &path.display().to_string())?;

        Ok(Extraction {
            shape: grid.shape(),
            coordinates,
        })
    }

    /// Scan an already decoded grid
    pub fn scan_grid(&self, grid: &RasterGrid, target: i64, label: &str) -> RasterResult<CoordinateSet> {
        let progress = ProgressTracker::for_scan(grid.shape().height as u64, label, self.show_progress);
        let coordinates = grid.find_value(target, &progress)?;
        progress.finish();

        info!("{}: {} samples equal {}", label, coordinates.len(), target);
        self.logger.note(&format!("Extracted {} coordinates from {}", coordinates.len(), label));

        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::raster::tests::test_utils::write_label_tiff;

    #[test]
    fn test_extract_from_file() {
        let path = write_label_tiff("extract.tiff", 3, 3, 1, 104, &[(0, 0), (1, 1)]);
        let logger = Logger::disabled();

        let extraction = ValueExtractor::new(&logger).extract_with_shape(&path, 104).unwrap();
        assert_eq!(extraction.shape, GridShape::new(3, 3, 1));
        let expected: CoordinateSet = [Coordinate::new(0, 0), Coordinate::new(1, 1)].into_iter().collect();
        assert_eq!(extraction.coordinates, expected);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_extract_no_matches() {
        let path = write_label_tiff("extract_empty.tiff", 2, 2, 1, 1, &[]);
        let logger = Logger::disabled();

        let found = ValueExtractor::new(&logger).extract(&path, 104).unwrap();
        assert!(found.is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
