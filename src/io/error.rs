//! Error types for arena construction, board loading and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible tilematch operations
///
/// Matching itself never fails; these errors come from building grids,
/// validating configuration and touching the file system.
#[derive(Debug)]
pub enum ArenaError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid was built from the wrong number of cells
    CellCountMismatch {
        /// Cells required by the grid dimensions
        expected: usize,
        /// Cells actually supplied
        actual: usize,
    },

    /// Position lies outside the grid
    OutOfBounds {
        /// Offending position as `[x, y]`
        position: [usize; 2],
        /// Grid dimensions as `(width, height)`
        dimensions: (usize, usize),
    },

    /// Board text could not be parsed
    InvalidBoard {
        /// 1-based line number in the board text
        line: usize,
        /// Description of the problem
        reason: String,
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

    /// Failed to encode or save a board image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "Grid needs {expected} cells but {actual} were supplied")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidBoard { line, reason } => {
                write!(f, "Invalid board at line {line}: {reason}")
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArenaError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for tilematch results
pub type Result<T> = std::result::Result<T, ArenaError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArenaError {
    ArenaError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a board parsing error
pub fn invalid_board(line: usize, reason: &impl ToString) -> ArenaError {
    ArenaError::InvalidBoard {
        line,
        reason: reason.to_string(),
    }
}
