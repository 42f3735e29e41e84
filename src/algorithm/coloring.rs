//! Deterministic greedy graph coloring
//!
//! Nodes are visited in graph traversal order. Each node takes the first
//! palette color not held by any already-colored neighbor; once assigned a
//! color is never revised. The result is valid but not necessarily minimal.

use bitvec::prelude::*;
use std::collections::HashMap;

use crate::algorithm::graph::RegionGraph;
use crate::io::error::{MapColorError, Result};
use crate::spatial::RegionId;

/// Ordered, non-empty list of colors; earlier colors are preferred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C> Palette<C> {
    /// Create a palette
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<C>) -> Result<Self> {
        if colors.is_empty() {
            return Err(MapColorError::InvalidPalette {
                reason: "palette must contain at least one color".to_string(),
            });
        }
        Ok(Self { colors })
    }

    /// Colors in preference order
    pub fn colors(&self) -> &[C] {
        &self.colors
    }

    /// Color at preference index `slot`
    pub fn get(&self, slot: usize) -> Option<&C> {
        self.colors.get(slot)
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Palette slots chosen so far, indexed by graph node slot
///
/// Unvisited nodes hold `None` and constrain nothing.
#[derive(Debug, Clone)]
pub struct ColoringState {
    assigned: Vec<Option<usize>>,
}

impl ColoringState {
    /// Create state for a graph with `node_count` nodes, all uncolored
    pub fn new(node_count: usize) -> Self {
        Self {
            assigned: vec![None; node_count],
        }
    }

    /// Palette slot held by the node at `node_slot`
    pub fn color_of(&self, node_slot: usize) -> Option<usize> {
        self.assigned.get(node_slot).copied().flatten()
    }

    /// Mark palette slots held by any already-colored neighbor
    pub fn forbidden_colors(&self, neighbor_slots: &[usize], palette_size: usize) -> BitVec {
        let mut forbidden = bitvec![0; palette_size];
        for &neighbor in neighbor_slots {
            if let Some(color) = self.color_of(neighbor).filter(|&c| c < palette_size) {
                forbidden.set(color, true);
            }
        }
        forbidden
    }

    /// First palette slot not forbidden for the node's neighborhood
    pub fn first_available(&self, neighbor_slots: &[usize], palette_size: usize) -> Option<usize> {
        self.forbidden_colors(neighbor_slots, palette_size)
            .first_zero()
    }

    /// Record the color of the node at `node_slot`
    pub fn assign(&mut self, node_slot: usize, color: usize) {
        if let Some(entry) = self.assigned.get_mut(node_slot) {
            *entry = Some(color);
        }
    }

    /// Number of colored nodes whose slots appear in `neighbor_slots`
    pub fn colored_count(&self, neighbor_slots: &[usize]) -> usize {
        neighbor_slots
            .iter()
            .filter(|&&slot| self.color_of(slot).is_some())
            .count()
    }
}

/// Final assignment of one palette color per graph node
#[derive(Debug, Clone)]
pub struct Coloring<T, C> {
    order: Vec<T>,
    slots: HashMap<T, usize>,
    palette: Palette<C>,
}

impl<T: RegionId, C> Coloring<T, C> {
    /// Color assigned to `node`, if it is a graph node
    pub fn color_of(&self, node: T) -> Option<&C> {
        self.slot_of(node).and_then(|slot| self.palette.get(slot))
    }

    /// Palette index assigned to `node`
    pub fn slot_of(&self, node: T) -> Option<usize> {
        self.slots.get(&node).copied()
    }

    /// `(node, color)` entries in traversal order
    pub fn iter(&self) -> impl Iterator<Item = (T, &C)> + '_ {
        self.order
            .iter()
            .filter_map(|&node| self.color_of(node).map(|color| (node, color)))
    }

    /// Colored nodes in traversal order
    pub fn nodes(&self) -> &[T] {
        &self.order
    }

    /// Palette the colors were drawn from
    pub const fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    /// Number of colored nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Test if no node was colored
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of nodes holding each palette slot
    pub fn usage(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for slot in self.slots.values() {
            if let Some(count) = counts.get_mut(*slot) {
                *count += 1;
            }
        }
        counts
    }

    /// Number of distinct palette colors in use
    pub fn colors_used(&self) -> usize {
        self.usage().iter().filter(|&&count| count > 0).count()
    }

    /// Test that every node of `graph` is colored and no edge is monochrome
    pub fn is_proper_for(&self, graph: &RegionGraph<T>) -> bool {
        graph.nodes().iter().all(|&node| self.slots.contains_key(&node))
            && graph
                .edges()
                .iter()
                .all(|&(a, b)| self.slot_of(a) != self.slot_of(b))
    }
}

/// Color every node of `graph` greedily from `palette`
///
/// # Errors
///
/// Returns [`MapColorError::PaletteExhausted`] for the first node whose
/// already-colored neighbors hold every palette color; no partial coloring
/// is returned
pub fn greedy_color<T: RegionId, C: Clone>(
    graph: &RegionGraph<T>,
    palette: &Palette<C>,
) -> Result<Coloring<T, C>> {
    let mut state = ColoringState::new(graph.node_count());
    let mut slots = HashMap::with_capacity(graph.node_count());

    for (node_slot, &node) in graph.nodes().iter().enumerate() {
        let neighbor_slots = graph.neighbor_slots(node_slot);
        let Some(color) = state.first_available(neighbor_slots, palette.len()) else {
            return Err(MapColorError::PaletteExhausted {
                node: node.to_string(),
                palette_size: palette.len(),
                colored_neighbors: state.colored_count(neighbor_slots),
            });
        };
        state.assign(node_slot, color);
        slots.insert(node, color);
    }

    Ok(Coloring {
        order: graph.nodes().to_vec(),
        slots,
        palette: palette.clone(),
    })
}
