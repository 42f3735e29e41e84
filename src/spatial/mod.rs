//! Spatial data structures
//!
//! This module contains the raster and neighborhood primitives:
//! - Labeled region rasters
//! - Neighbor stencils for adjacency scanning

/// Labeled raster of region identifiers
pub mod raster;
/// Neighbor offset stencils
pub mod stencil;

pub use raster::{Raster, RegionId};
pub use stencil::{Connectivity, Stencil};
