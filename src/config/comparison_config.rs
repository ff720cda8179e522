//! Comparison configuration values

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::raster::errors::{RasterError, RasterResult};

/// Default raster of the earlier snapshot
pub const DEFAULT_FIRST_IMAGE: &str = "2016-01-01_city_label.tiff";
/// Default raster of the later snapshot
pub const DEFAULT_SECOND_IMAGE: &str = "2021-01-01_city_label.tiff";
/// Default label value to track
pub const DEFAULT_TARGET_VALUE: i64 = 104;
/// Default CSV output, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
/// Default log file
pub const DEFAULT_LOG_FILE: &str = "rasterdiff.log";

/// What to do when the two grids have different shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Fail with `RasterError::ShapeMismatch`
    #[default]
    Reject,
    /// Warn and compare the coordinate sets anyway
    BestEffort,
}

impl FromStr for ShapePolicy {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(ShapePolicy::Reject),
            "best-effort" | "best_effort" => Ok(ShapePolicy::BestEffort),
            _ => Err(RasterError::Config(format!(
                "Unknown shape policy '{}', expected 'reject' or 'best-effort'", s
            ))),
        }
    }
}

impl fmt::Display for ShapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapePolicy::Reject => f.write_str("reject"),
            ShapePolicy::BestEffort => f.write_str("best-effort"),
        }
    }
}

/// Inputs of one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Raster of the earlier snapshot
    pub first_image: PathBuf,
    /// Raster of the later snapshot
    pub second_image: PathBuf,
    /// Value to track between the snapshots
    pub target_value: i64,
    /// CSV file receiving the changes
    pub output_file: PathBuf,
    /// Handling of grids with different shapes
    pub shape_policy: ShapePolicy,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig {
            first_image: PathBuf::from(DEFAULT_FIRST_IMAGE),
            second_image: PathBuf::from(DEFAULT_SECOND_IMAGE),
            target_value: DEFAULT_TARGET_VALUE,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            shape_policy: ShapePolicy::default(),
        }
    }
}

impl ComparisonConfig {
    /// Create a config for two images and a target value, other fields default
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(first_image: P, second_image: Q, target_value: i64) -> Self {
        ComparisonConfig {
            first_image: first_image.as_ref().to_path_buf(),
            second_image: second_image.as_ref().to_path_buf(),
            target_value,
            ..Default::default()
        }
    }

    /// Set the output file
    pub fn with_output_file<P: AsRef<Path>>(mut self, output_file: P) -> Self {
        self.output_file = output_file.as_ref().to_path_buf();
        self
    }

    /// Set the shape policy
    pub fn with_shape_policy(mut self, shape_policy: ShapePolicy) -> Self {
        self.shape_policy = shape_policy;
        self
    }

    /// Load a config file, starting from the defaults
    ///
    /// # Arguments
    /// * `path` - TOML file to read
    ///
    /// # Returns
    /// The merged configuration or an error
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> RasterResult<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML content, keys not present keep their defaults
    ///
    /// Recognized keys: `first_image`, `second_image`, `target_value`,
    /// `output_file`, `shape_policy`. Keys may also live in a
    /// `[comparison]` table.
    pub fn from_toml_str(content: &str) -> RasterResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RasterError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let table = toml_value.get("comparison").unwrap_or(&toml_value);
        let mut config = ComparisonConfig::default();

        if let Some(path) = Self::string_key(table, "first_image")? {
            config.first_image = PathBuf::from(path);
        }
        if let Some(path) = Self::string_key(table, "second_image")? {
            config.second_image = PathBuf::from(path);
        }
        if let Some(path) = Self::string_key(table, "output_file")? {
            config.output_file = PathBuf::from(path);
        }
        if let Some(policy) = Self::string_key(table, "shape_policy")? {
            config.shape_policy = policy.parse()?;
        }
        if let Some(value) = table.get("target_value") {
            config.target_value = value.as_integer().ok_or_else(|| {
                RasterError::Config(format!("target_value must be an integer, got {}", value))
            })?;
        }

        Ok(config)
    }

    /// Helper to read an optional string key
    fn string_key<'v>(table: &'v toml::Value, key: &str) -> RasterResult<Option<&'v str>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => value.as_str()
                .map(Some)
                .ok_or_else(|| RasterError::Config(format!("{} must be a string, got {}", key, value))),
        }
    }

    /// Parse a target value given as text
    pub fn parse_target_value(text: &str) -> RasterResult<i64> {
        text.trim().parse::<i64>()
            .map_err(|_| RasterError::Config(format!("Invalid target value: {}", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.first_image, PathBuf::from("2016-01-01_city_label.tiff"));
        assert_eq!(config.second_image, PathBuf::from("2021-01-01_city_label.tiff"));
        assert_eq!(config.target_value, 104);
        assert_eq!(config.output_file, PathBuf::from("output.csv"));
        assert_eq!(config.shape_policy, ShapePolicy::Reject);
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let config = ComparisonConfig::from_toml_str(r#"
            first_image = "a.tiff"
            target_value = 7
            shape_policy = "best-effort"
        "#).unwrap();

        assert_eq!(config.first_image, PathBuf::from("a.tiff"));
        assert_eq!(config.second_image, PathBuf::from(DEFAULT_SECOND_IMAGE));
        assert_eq!(config.target_value, 7);
        assert_eq!(config.shape_policy, ShapePolicy::BestEffort);
    }

    #[test]
    fn test_from_toml_comparison_table() {
        let config = ComparisonConfig::from_toml_str(r#"
            [comparison]
            second_image = "later.tif"
            output_file = "changes.csv"
        "#).unwrap();

        assert_eq!(config.second_image, PathBuf::from("later.tif"));
        assert_eq!(config.output_file, PathBuf::from("changes.csv"));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(
            ComparisonConfig::from_toml_str("target_value = \"104\""),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            ComparisonConfig::from_toml_str("shape_policy = \"maybe\""),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            ComparisonConfig::from_toml_str("first_image = 3"),
            Err(RasterError::Config(_))
        ));
        assert!(matches!(
            ComparisonConfig::from_toml_str("not toml at all ="),
            Err(RasterError::Config(_))
        ));
    }

    #[test]
    fn test_parse_target_value() {
        assert_eq!(ComparisonConfig::parse_target_value(" 104 ").unwrap(), 104);
        assert_eq!(ComparisonConfig::parse_target_value("-3").unwrap(), -3);
        assert!(ComparisonConfig::parse_target_value("abc").is_err());
    }
}
