//! Custom error types for raster comparison

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error kinds raised while comparing two rasters
#[derive(Debug)]
pub enum RasterError {
    /// Filesystem error (permissions, disk full, ...)
    Io(io::Error),
    /// Source image missing, unreadable or in an unsupported format
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Target value cannot be compared with the grid's element type
    TypeMismatch {
        target: i64,
        element_type: &'static str,
    },
    /// Append requested but no output file exists yet
    AppendTargetMissing(PathBuf),
    /// The two grids do not share the same shape
    ShapeMismatch {
        first: String,
        second: String,
    },
    /// Invalid configuration value
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Io(e) => write!(f, "I/O error: {}", e),
            RasterError::Decode { path, source } =>
                write!(f, "Failed to decode image {}: {}", path.display(), source),
            RasterError::TypeMismatch { target, element_type } =>
                write!(f, "Target value {} is not comparable with {} samples", target, element_type),
            RasterError::AppendTargetMissing(path) =>
                write!(f, "No file found to append to: {}", path.display()),
            RasterError::ShapeMismatch { first, second } =>
                write!(f, "Raster shapes differ: {} vs {}", first, second),
            RasterError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RasterError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RasterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RasterError::Io(e) => Some(e),
            RasterError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for RasterError {
    fn from(error: io::Error) -> Self {
        RasterError::Io(error)
    }
}

impl From<String> for RasterError {
    fn from(msg: String) -> Self {
        RasterError::GenericError(msg)
    }
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
