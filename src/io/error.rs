//! Error types and path context for coloring operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all coloring operations
#[derive(Debug)]
pub enum MapColorError {
    /// Failed to decode a raster image from the filesystem
    RasterLoad {
        /// Path to the raster file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A text raster could not be parsed
    RasterParse {
        /// Path to the raster file
        path: PathBuf,
        /// One-based line number of the offending line
        line: usize,
        /// Description of what could not be parsed
        reason: String,
    },

    /// Raster shape doesn't meet pipeline requirements
    InvalidRaster {
        /// Description of what's wrong with the raster
        reason: String,
    },

    /// Derived data doesn't meet an output's requirements
    InvalidSourceData {
        /// Description of what's missing
        reason: String,
    },

    /// Neighbor stencil is empty or malformed
    InvalidStencil {
        /// Description of what's wrong with the stencil
        reason: String,
    },

    /// Palette is empty or contains unusable entries
    InvalidPalette {
        /// Description of what's wrong with the palette
        reason: String,
    },

    /// Every palette color is held by an already-colored neighbor
    ///
    /// The palette is too small for the local structure of the graph.
    PaletteExhausted {
        /// Region that could not be colored
        node: String,
        /// Number of colors available
        palette_size: usize,
        /// Neighbors of the region already colored when it was visited
        colored_neighbors: usize,
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

    /// Failed to save a rendered image to disk
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
}

impl fmt::Display for MapColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RasterLoad { path, source } => {
                write!(f, "Failed to load raster '{}': {source}", path.display())
            }
            Self::RasterParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse raster '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::InvalidRaster { reason } => write!(f, "Invalid raster: {reason}"),
            Self::InvalidSourceData { reason } => write!(f, "Invalid source data: {reason}"),
            Self::InvalidStencil { reason } => write!(f, "Invalid stencil: {reason}"),
            Self::InvalidPalette { reason } => write!(f, "Invalid palette: {reason}"),
            Self::PaletteExhausted {
                node,
                palette_size,
                colored_neighbors,
            } => {
                write!(
                    f,
                    "Palette of {palette_size} colors exhausted at region {node} \
                     ({colored_neighbors} colored neighbors)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for MapColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RasterLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for coloring results
pub type Result<T> = std::result::Result<T, MapColorError>;

impl From<std::io::Error> for MapColorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file path and operation to I/O failures
pub trait WithPath<T> {
    /// Replace unknown path context on file system errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<MapColorError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            MapColorError::FileSystem { source, .. } => MapColorError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            other => other,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapColorError {
    MapColorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
