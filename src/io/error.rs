//! Error types for grid construction, mutation and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::point::GridSize;
use crate::world::object::GridObjectId;

/// Main error type for all fallible operations
///
/// Queries on the position cache never fail; out-of-bounds lookups yield
/// `None` instead. These variants cover the collaborators around it.
#[derive(Debug)]
pub enum TowerError {
    /// Grid bounds are unusable
    InvalidGridSize {
        /// Requested bounds
        size: GridSize,
        /// Why they were rejected
        reason: String,
    },

    /// A handle does not resolve to an object on the grid
    UnknownObject {
        /// The stale or foreign handle
        id: GridObjectId,
    },

    /// A committed object cannot return to a preview state
    AlreadyPlaced {
        /// Handle of the placed object
        id: GridObjectId,
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

    /// Operation needs at least one grid cell
    EmptyGrid {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Failed to encode or write an overlay image
    OverlayExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

    /// The global log subscriber could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { size, reason } => {
                write!(f, "Invalid grid size {size}: {reason}")
            }
            Self::UnknownObject { id } => {
                write!(f, "Object {id} is not on the grid")
            }
            Self::AlreadyPlaced { id } => {
                write!(f, "Object {id} is already placed")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyGrid { operation } => {
                write!(f, "Cannot {operation}: the grid has no cells")
            }
            Self::OverlayExport { path, source } => {
                write!(
                    f,
                    "Failed to export overlay to '{}': {source}",
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
            Self::Logging { reason } => {
                write!(f, "Failed to initialise logging: {reason}")
            }
        }
    }
}

impl std::error::Error for TowerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OverlayExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, TowerError>;

impl From<image::ImageError> for TowerError {
    fn from(err: image::ImageError) -> Self {
        Self::OverlayExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TowerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TowerError {
    TowerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
