//! Raster-to-coloring pipeline orchestration

use tracing::{debug, info};

use crate::algorithm::adjacency::{AdjacencySet, extract_adjacency};
use crate::algorithm::coloring::{Coloring, Palette, greedy_color};
use crate::algorithm::graph::RegionGraph;
use crate::io::error::Result;
use crate::spatial::{Raster, RegionId, Stencil};

/// Everything derived from one raster: relation, graph, coloring
///
/// Regions without a differently labeled neighbor are not graph nodes and
/// receive no color; they are listed in `isolated` so renderers can paint
/// them with a background color.
#[derive(Debug, Clone)]
pub struct ColoredRegions<T, C> {
    /// Deduplicated adjacency pairs
    pub adjacency: AdjacencySet<T>,
    /// Graph induced by the pairs
    pub graph: RegionGraph<T>,
    /// Greedy color assignment for every graph node
    pub coloring: Coloring<T, C>,
    /// Raster regions absent from the graph, ascending
    pub isolated: Vec<T>,
}

impl<T: RegionId, C> ColoredRegions<T, C> {
    /// Color for a raster region, or `background` for isolated regions
    pub fn color_or<'a>(&'a self, region: T, background: &'a C) -> &'a C {
        self.coloring.color_of(region).unwrap_or(background)
    }
}

/// Extract adjacency from `raster` and color the resulting graph
///
/// # Errors
///
/// Returns [`crate::MapColorError::PaletteExhausted`] if `palette` cannot
/// color the graph greedily
pub fn color_raster<T: RegionId, C: Clone>(
    raster: &Raster<T>,
    stencil: &Stencil,
    palette: &Palette<C>,
) -> Result<ColoredRegions<T, C>> {
    debug!(
        rows = raster.rows(),
        cols = raster.cols(),
        offsets = stencil.len(),
        "scanning raster for adjacent regions"
    );
    let adjacency = extract_adjacency(raster, stencil);

    let graph = RegionGraph::from_adjacency(&adjacency);
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        max_degree = graph.max_degree(),
        "built region graph"
    );

    let coloring = greedy_color(&graph, palette)?;

    let isolated: Vec<T> = raster
        .region_ids()
        .into_iter()
        .filter(|&region| !graph.contains(region))
        .collect();

    info!(
        regions = graph.node_count() + isolated.len(),
        colored = coloring.len(),
        isolated = isolated.len(),
        colors_used = coloring.colors_used(),
        "colored raster regions"
    );

    Ok(ColoredRegions {
        adjacency,
        graph,
        coloring,
        isolated,
    })
}
