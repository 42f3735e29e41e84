//! Region graph drawing: colored node discs joined by thick edges

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use std::path::Path;

use crate::algorithm::coloring::Coloring;
use crate::algorithm::graph::RegionGraph;
use crate::analysis::layout::{Layout, layout_positions};
use crate::io::configuration::{
    DEFAULT_SEED, EDGE_WIDTH, GRAPH_BACKGROUND_RGBA, GRAPH_IMAGE_SIZE, GRAPH_MARGIN,
    GRAPH_STROKE_RGBA, NODE_RADIUS,
};
use crate::io::error::{MapColorError, Result, invalid_parameter};
use crate::io::image::save_png;
use crate::io::palette::Swatch;
use crate::spatial::RegionId;

/// Options controlling the graph drawing
#[derive(Debug, Clone, Copy)]
pub struct GraphStyle {
    /// Node placement strategy
    pub layout: Layout,
    /// Seed for randomized layouts
    pub seed: u64,
    /// Width and height of the square canvas in pixels
    pub size: u32,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            seed: DEFAULT_SEED,
            size: GRAPH_IMAGE_SIZE,
        }
    }
}

/// Draw `graph` with each node filled in its assigned color
///
/// # Errors
///
/// Returns an error if the graph has no nodes or the canvas is too small
/// to hold the margins
pub fn render_graph<T: RegionId>(
    graph: &RegionGraph<T>,
    coloring: &Coloring<T, Swatch>,
    style: GraphStyle,
) -> Result<RgbaImage> {
    if graph.is_empty() {
        return Err(MapColorError::InvalidSourceData {
            reason: "region graph has no nodes to draw".to_string(),
        });
    }
    let drawable = style.size as f32 - 2.0 * GRAPH_MARGIN;
    if drawable <= 0.0 {
        return Err(invalid_parameter(
            "size",
            &style.size,
            &"canvas is smaller than its margins",
        ));
    }

    let to_canvas = |[x, y]: [f64; 2]| {
        (
            GRAPH_MARGIN + x as f32 * drawable,
            GRAPH_MARGIN + y as f32 * drawable,
        )
    };
    let points: Vec<(f32, f32)> = layout_positions(graph, style.layout, style.seed)
        .into_iter()
        .map(to_canvas)
        .collect();

    let mut img = RgbaImage::from_pixel(style.size, style.size, Rgba(GRAPH_BACKGROUND_RGBA));
    let stroke = Rgba(GRAPH_STROKE_RGBA);

    for (slot, &start) in points.iter().enumerate() {
        for &neighbor in graph.neighbor_slots(slot) {
            // Each undirected edge appears twice in the neighbor lists
            if neighbor <= slot {
                continue;
            }
            if let Some(&end) = points.get(neighbor) {
                draw_thick_line(&mut img, start, end, EDGE_WIDTH, stroke);
            }
        }
    }

    for (&node, &(x, y)) in graph.nodes().iter().zip(&points) {
        let center = (x.round() as i32, y.round() as i32);
        let fill = coloring
            .color_of(node)
            .map_or(GRAPH_BACKGROUND_RGBA, |swatch| swatch.rgba);
        draw_filled_circle_mut(&mut img, center, NODE_RADIUS, Rgba(fill));
        draw_hollow_circle_mut(&mut img, center, NODE_RADIUS, stroke);
    }

    Ok(img)
}

// Parallel one-pixel segments offset along the edge normal
fn draw_thick_line(
    img: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    if length <= f32::EPSILON {
        return;
    }
    let (nx, ny) = (-dy / length, dx / length);
    let half = (width as f32 - 1.0) / 2.0;

    for step in 0..width.max(1) {
        let shift = step as f32 - half;
        draw_line_segment_mut(
            img,
            (start.0 + nx * shift, start.1 + ny * shift),
            (end.0 + nx * shift, end.1 + ny * shift),
            color,
        );
    }
}

/// Render the graph and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering or saving fails
pub fn export_graph_png<T: RegionId>(
    graph: &RegionGraph<T>,
    coloring: &Coloring<T, Swatch>,
    style: GraphStyle,
    output_path: &Path,
) -> Result<()> {
    let img = render_graph(graph, coloring, style)?;
    save_png(&img, output_path)
}
