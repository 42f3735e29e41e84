//! Node placement for graph drawings
//!
//! Layouts return one position per graph node, in node order, inside the
//! unit square `[0, 1] x [0, 1]`.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::graph::RegionGraph;
use crate::io::configuration::{SPRING_INITIAL_TEMPERATURE, SPRING_ITERATIONS};
use crate::spatial::RegionId;

/// Available node placement strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// Nodes evenly spaced on a circle, in node order
    #[default]
    Circular,
    /// Seeded force-directed placement
    Spring,
}

/// Compute positions for every node of `graph`
pub fn layout_positions<T: RegionId>(
    graph: &RegionGraph<T>,
    layout: Layout,
    seed: u64,
) -> Vec<[f64; 2]> {
    match layout {
        Layout::Circular => circular_layout(graph.node_count()),
        Layout::Spring => spring_layout(graph, seed),
    }
}

/// Place `count` nodes counter-clockwise on a circle, starting at angle zero
pub fn circular_layout(count: usize) -> Vec<[f64; 2]> {
    if count == 1 {
        return vec![[0.5, 0.5]];
    }
    (0..count)
        .map(|index| {
            let angle = std::f64::consts::TAU * index as f64 / count as f64;
            [0.5 + 0.5 * angle.cos(), 0.5 - 0.5 * angle.sin()]
        })
        .collect()
}

/// Fruchterman-Reingold placement from seeded random starting points
///
/// Repulsion acts between every node pair, attraction along edges; the
/// maximum step shrinks linearly to zero. The result is rescaled to fill
/// the unit square.
pub fn spring_layout<T: RegionId>(graph: &RegionGraph<T>, seed: u64) -> Vec<[f64; 2]> {
    let count = graph.node_count();
    if count <= 1 {
        return circular_layout(count);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<[f64; 2]> = (0..count)
        .map(|_| [rng.random::<f64>(), rng.random::<f64>()])
        .collect();

    let ideal = (1.0 / count as f64).sqrt();
    let mut temperature = SPRING_INITIAL_TEMPERATURE;
    let cooling = SPRING_INITIAL_TEMPERATURE / SPRING_ITERATIONS as f64;

    for _ in 0..SPRING_ITERATIONS {
        let mut displacement = vec![[0.0f64; 2]; count];

        for (i, &[xi, yi]) in positions.iter().enumerate() {
            for (j, &[xj, yj]) in positions.iter().enumerate() {
                if i == j {
                    continue;
                }
                let (dx, dy) = (xi - xj, yi - yj);
                let distance = dx.hypot(dy).max(0.01);
                let force = ideal * ideal / distance;
                if let Some(d) = displacement.get_mut(i) {
                    d[0] += dx / distance * force;
                    d[1] += dy / distance * force;
                }
            }
        }

        for slot in 0..count {
            let Some(&[xs, ys]) = positions.get(slot) else {
                continue;
            };
            for &neighbor in graph.neighbor_slots(slot) {
                let Some(&[xn, yn]) = positions.get(neighbor) else {
                    continue;
                };
                let (dx, dy) = (xs - xn, ys - yn);
                let distance = dx.hypot(dy).max(0.01);
                let force = distance * distance / ideal;
                if let Some(d) = displacement.get_mut(slot) {
                    d[0] -= dx / distance * force;
                    d[1] -= dy / distance * force;
                }
            }
        }

        for (position, [dx, dy]) in positions.iter_mut().zip(displacement) {
            let length = dx.hypot(dy).max(f64::EPSILON);
            let step = length.min(temperature);
            position[0] += dx / length * step;
            position[1] += dy / length * step;
        }
        temperature -= cooling;
    }

    rescale_to_unit(&mut positions);
    positions
}

fn rescale_to_unit(positions: &mut [[f64; 2]]) {
    let bounds = |axis: usize| {
        positions
            .iter()
            .filter_map(|p| p.get(axis).copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };
    let (min_x, max_x) = bounds(0);
    let (min_y, max_y) = bounds(1);

    // Keep the aspect ratio so the drawing is not distorted
    let span = (max_x - min_x).max(max_y - min_y);
    if span <= f64::EPSILON {
        positions.iter_mut().for_each(|p| *p = [0.5, 0.5]);
        return;
    }
    let pad_x = (span - (max_x - min_x)) / 2.0;
    let pad_y = (span - (max_y - min_y)) / 2.0;
    for position in positions.iter_mut() {
        position[0] = (position[0] - min_x + pad_x) / span;
        position[1] = (position[1] - min_y + pad_y) / span;
    }
}
