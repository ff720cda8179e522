//! Target value extraction from raster files

mod value_extractor;

pub use value_extractor::{Extraction, ValueExtractor};
