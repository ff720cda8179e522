pub mod raster;
pub mod coordinate;
pub mod extractor;
pub mod diff;
pub mod writer;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{ChangeDetector, ChangeSummary};

pub use raster::{GridReader, GridShape, RasterError, RasterGrid, RasterResult};
pub use coordinate::{Coordinate, CoordinateSet};
pub use extractor::{Extraction, ValueExtractor};
pub use diff::{diff, ChangeDirection, ChangeSet};
pub use writer::{read_change_file, ChangeRecord, ChangeWriter, WriteMode};
pub use config::{ComparisonConfig, ShapePolicy};
