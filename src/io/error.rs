//! Error types for grid, level and export operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::point::Point;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum MatrixError {
    /// Write addressed a cell outside the grid
    ///
    /// Reads never produce this; they return `None` instead.
    OutOfBounds {
        /// Requested coordinate
        point: Point,
        /// Grid width at the time of the write
        width: usize,
        /// Grid height at the time of the write
        height: usize,
    },

    /// Requested grid dimensions cannot be allocated
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Level text could not be parsed
    InvalidLevel {
        /// 1-based line number in the level source
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Input data is unusable for the requested operation
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Failed to load a level image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The global logger could not be installed
    Logger {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate {point} is outside the {width}x{height} grid"
                )
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidLevel { line, reason } => {
                write!(f, "Invalid level at line {line}: {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logger { reason } => {
                write!(f, "Failed to install logger: {reason}")
            }
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, MatrixError>;

impl From<log::SetLoggerError> for MatrixError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MatrixError {
    MatrixError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a level parsing error
pub fn invalid_level(line: usize, reason: &impl ToString) -> MatrixError {
    MatrixError::InvalidLevel {
        line,
        reason: reason.to_string(),
    }
}
