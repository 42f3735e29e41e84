//! Analysis of pipeline results: summaries and graph layouts

/// Node placement for graph drawings
pub mod layout;
/// Summary statistics of a colored raster
pub mod statistics;
