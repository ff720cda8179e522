//! Raster image reader
//!
//! Decodes image files into `RasterGrid`s. Format support is whatever the
//! `image` crate was built with (TIFF, PNG, ...).

use std::path::Path;

use image::DynamicImage;
use log::{debug, info};

use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::grid::{GridSamples, GridShape, RasterGrid};
use crate::utils::logger::Logger;

/// Reader turning image files into grids
pub struct GridReader<'a> {
    /// Logger instance
    logger: &'a Logger,
}

impl<'a> GridReader<'a> {
    /// Creates a new grid reader
    pub fn new(logger: &'a Logger) -> Self {
        GridReader { logger }
    }

    /// Decode the image at `path`
    ///
    /// # Arguments
    /// * `path` - Image file to read
    ///
    /// # Returns
    /// The decoded grid, or `RasterError::Decode` if the file is missing,
    /// unreadable or not a supported image format
    pub fn read<P: AsRef<Path>>(&self, path: P) -> RasterResult<RasterGrid> {
        let path = path.as_ref();
        info!("Decoding raster {}", path.display());

        let image = image::open(path).map_err(|source| RasterError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let grid = grid_from_image(image)?;
        debug!("Decoded {} grid with {} samples", grid.shape(), grid.element_type());
        self.logger.note(&format!(
            "Read {}: shape {}, element type {}",
            path.display(), grid.shape(), grid.element_type()
        ));

        Ok(grid)
    }
}

/// Convert a decoded image into a grid, keeping native sample precision
pub fn grid_from_image(image: DynamicImage) -> RasterResult<RasterGrid> {
    let (width, height) = (image.width(), image.height());

    let (channels, samples) = match image {
        DynamicImage::ImageLuma8(buf) => (1, GridSamples::U8(buf.into_raw())),
        DynamicImage::ImageLumaA8(buf) => (2, GridSamples::U8(buf.into_raw())),
        DynamicImage::ImageRgb8(buf) => (3, GridSamples::U8(buf.into_raw())),
        DynamicImage::ImageRgba8(buf) => (4, GridSamples::U8(buf.into_raw())),
        DynamicImage::ImageLuma16(buf) => (1, GridSamples::U16(buf.into_raw())),
        DynamicImage::ImageLumaA16(buf) => (2, GridSamples::U16(buf.into_raw())),
        DynamicImage::ImageRgb16(buf) => (3, GridSamples::U16(buf.into_raw())),
        DynamicImage::ImageRgba16(buf) => (4, GridSamples::U16(buf.into_raw())),
        DynamicImage::ImageRgb32F(buf) => (3, GridSamples::F32(buf.into_raw())),
        DynamicImage::ImageRgba32F(buf) => (4, GridSamples::F32(buf.into_raw())),
        other => (4, GridSamples::F32(other.to_rgba32f().into_raw())),
    };

    RasterGrid::new(GridShape::new(height, width, channels), samples)
}
