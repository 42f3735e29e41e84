//! Conflict-free coloring of labeled raster regions
//!
//! The pipeline scans a raster of integer region identifiers with a neighbor
//! stencil, collects the pairs of differently labeled regions that touch, and
//! colors the resulting region graph greedily so that no two adjacent regions
//! share a palette color. Results render as a map image, a graph image, and a
//! color table for cartographic tools.

#![forbid(unsafe_code)]

/// Adjacency extraction, region graph, and greedy coloring
pub mod algorithm;
/// Run summaries and graph layouts
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Raster and neighbor stencil primitives
pub mod spatial;

pub use algorithm::adjacency::{AdjacencySet, extract_adjacency};
pub use algorithm::coloring::{Coloring, Palette, greedy_color};
pub use algorithm::graph::RegionGraph;
pub use algorithm::pipeline::{ColoredRegions, color_raster};
pub use io::error::{MapColorError, Result};
pub use spatial::{Connectivity, Raster, RegionId, Stencil};
