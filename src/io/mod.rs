//! File formats, rendering, and the command-line surface

/// Command-line parsing and batch processing
pub mod cli;
/// Color table emission
pub mod colortable;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Map image rendering
pub mod image;
/// Palette parsing
pub mod palette;
/// Batch progress display
pub mod progress;
/// Raster loading from text grids and label images
pub mod raster;
/// Region graph drawing
pub mod visualization;
