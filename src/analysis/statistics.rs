//! Summary statistics for a colored raster

use std::fmt;

use crate::algorithm::pipeline::ColoredRegions;
use crate::spatial::{Raster, RegionId};

/// Counts describing one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringSummary {
    /// Raster dimensions (rows, cols)
    pub dimensions: (usize, usize),
    /// Distinct region identifiers in the raster
    pub regions: usize,
    /// Regions that are graph nodes
    pub graph_nodes: usize,
    /// Adjacency pairs
    pub edges: usize,
    /// Regions with no differently labeled neighbor
    pub isolated: usize,
    /// Largest number of neighbors of any region
    pub max_degree: usize,
    /// Distinct palette colors assigned
    pub colors_used: usize,
    /// Palette size
    pub palette_size: usize,
    /// Regions per palette color, in palette order
    pub usage: Vec<usize>,
}

impl ColoringSummary {
    /// Summarize a pipeline result for `raster`
    pub fn new<T: RegionId, C>(raster: &Raster<T>, result: &ColoredRegions<T, C>) -> Self {
        let usage = result.coloring.usage();
        Self {
            dimensions: (raster.rows(), raster.cols()),
            regions: result.graph.node_count() + result.isolated.len(),
            graph_nodes: result.graph.node_count(),
            edges: result.graph.edge_count(),
            isolated: result.isolated.len(),
            max_degree: result.graph.max_degree(),
            colors_used: usage.iter().filter(|&&count| count > 0).count(),
            palette_size: usage.len(),
            usage,
        }
    }

    /// Upper bound on colors any greedy order may need: max degree + 1
    pub const fn greedy_bound(&self) -> usize {
        self.max_degree + 1
    }

    /// Mean number of neighbors per graph node
    pub fn mean_degree(&self) -> f64 {
        if self.graph_nodes == 0 {
            0.0
        } else {
            2.0 * self.edges as f64 / self.graph_nodes as f64
        }
    }
}

impl fmt::Display for ColoringSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} raster, {} regions ({} isolated), {} adjacencies, max degree {}, \
             {}/{} colors used",
            self.dimensions.0,
            self.dimensions.1,
            self.regions,
            self.isolated,
            self.edges,
            self.max_degree,
            self.colors_used,
            self.palette_size
        )
    }
}
