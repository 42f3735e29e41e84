/// Stencil scanning into a deduplicated adjacency relation
pub mod adjacency;
/// Greedy palette assignment over the region graph
pub mod coloring;
/// Undirected region graph with insertion-ordered nodes
pub mod graph;
/// Orchestration of extraction and coloring for one raster
pub mod pipeline;
