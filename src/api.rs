use std::path::PathBuf;

use log::{info, warn};

use crate::config::{ComparisonConfig, ShapePolicy};
use crate::diff::{diff, ChangeDirection, ChangeSet};
use crate::extractor::ValueExtractor;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;
use crate::writer::{ChangeWriter, WriteMode};

/// Counts reported after a successful comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary {
    /// Rows tagged `-1`
    pub disappeared: usize,
    /// Rows tagged `+1`
    pub appeared: usize,
    /// File holding the rows
    pub output_file: PathBuf,
}

/// Main interface to the comparison
///
/// Runs extract, extract, diff, create-write, append-write in that order.
/// Any error stops the sequence; nothing already written is rolled back.
pub struct ChangeDetector<'a> {
    config: ComparisonConfig,
    logger: &'a Logger,
    show_progress: bool,
}

impl<'a> ChangeDetector<'a> {
    /// Create a detector for one configuration
    ///
    /// # Arguments
    /// * `config` - Images, target value and output file
    /// * `logger` - Logger for recording operations
    pub fn new(config: ComparisonConfig, logger: &'a Logger) -> Self {
        ChangeDetector {
            config,
            logger,
            show_progress: false,
        }
    }

    /// Draw scan progress bars on stderr
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Compute the changes without writing anything
    ///
    /// The first image is fully extracted before the second one is opened.
    ///
    /// # Returns
    /// The change set and the coordinate dimensionality shared by both grids
    pub fn detect(&self) -> RasterResult<(ChangeSet, usize)> {
        let extractor = ValueExtractor::new(self.logger).with_progress(self.show_progress);
        let target = self.config.target_value;

        let before = extractor.extract_with_shape(&self.config.first_image, target)?;
        let after = extractor.extract_with_shape(&self.config.second_image, target)?;

        if before.shape != after.shape {
            let (a, b) = (before.shape.to_string(), after.shape.to_string());
            match self.config.shape_policy {
                ShapePolicy::Reject => return Err(RasterError::ShapeMismatch { first: a, second: b }),
                ShapePolicy::BestEffort => warn!("Comparing rasters of different shapes: {} vs {}", a, b),
            }
        }
        if before.shape.axis_count() != after.shape.axis_count() {
            return Err(RasterError::ShapeMismatch {
                first: before.shape.to_string(),
                second: after.shape.to_string(),
            });
        }

        let changes = diff(&before.coordinates, &after.coordinates);
        if changes.is_unchanged() {
            info!("Value {} occupies the same coordinates in both rasters", target);
        } else {
            info!("{} coordinates changed: {} disappeared, {} appeared",
                  changes.total(), changes.disappeared.len(), changes.appeared.len());
        }

        Ok((changes, before.shape.axis_count()))
    }

    /// Run the full comparison and write the output file
    ///
    /// # Returns
    /// Row counts per direction, or the first error encountered
    pub fn run(&self) -> RasterResult<ChangeSummary> {
        info!("Comparing {} with {} for value {}",
              self.config.first_image.display(),
              self.config.second_image.display(),
              self.config.target_value);

        let (changes, axis_count) = self.detect()?;
        let writer = ChangeWriter::new(&self.config.output_file, axis_count);
        let (disappeared, appeared) = self.write_changes(&changes, &writer)?;

        self.logger.note(&format!(
            "Wrote {} disappeared and {} appeared rows to {}",
            disappeared, appeared, writer.output_path().display()
        ));

        Ok(ChangeSummary {
            disappeared,
            appeared,
            output_file: writer.output_path().to_path_buf(),
        })
    }

    /// Create-write the disappeared rows, then append the appeared rows
    ///
    /// A failing append leaves the created file in place.
    fn write_changes(&self, changes: &ChangeSet, writer: &ChangeWriter) -> RasterResult<(usize, usize)> {
        let disappeared = writer.write(
            changes.for_direction(ChangeDirection::Disappeared),
            ChangeDirection::Disappeared.tag(),
            WriteMode::Create,
        )?;
        let appeared = writer.write(
            changes.for_direction(ChangeDirection::Appeared),
            ChangeDirection::Appeared.tag(),
            WriteMode::Append,
        )?;

        Ok((disappeared, appeared))
    }
}
