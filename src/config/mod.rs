//! Comparison configuration
//!
//! Defaults, TOML file loading and validation of the comparison inputs.

mod comparison_config;

pub use comparison_config::{
    ComparisonConfig, ShapePolicy, DEFAULT_FIRST_IMAGE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_SECOND_IMAGE, DEFAULT_TARGET_VALUE,
};
