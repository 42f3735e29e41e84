//! Undirected region graph built from adjacency pairs
//!
//! Node order is the order in which identifiers first appear while edges are
//! inserted. For a graph built from an [`AdjacencySet`] that means walking the
//! canonical pairs in ascending order; this order drives greedy coloring and
//! is part of its reproducibility contract.

use std::collections::{HashMap, HashSet};

use crate::algorithm::adjacency::{AdjacencySet, canonical_pair};
use crate::spatial::RegionId;

/// Simple undirected graph over region identifiers
#[derive(Debug, Clone)]
pub struct RegionGraph<T> {
    nodes: Vec<T>,
    index: HashMap<T, usize>,
    neighbors: Vec<Vec<usize>>,
    edges: Vec<(T, T)>,
}

impl<T: RegionId> RegionGraph<T> {
    /// Build the graph of an adjacency relation
    pub fn from_adjacency(adjacency: &AdjacencySet<T>) -> Self {
        Self::from_edges(adjacency.iter())
    }

    /// Build a graph from edges in the given order
    ///
    /// Self-loops are dropped and repeated edges (in either orientation)
    /// are kept once.
    pub fn from_edges<I: IntoIterator<Item = (T, T)>>(edges: I) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            neighbors: Vec::new(),
            edges: Vec::new(),
        };
        let mut seen = HashSet::new();

        for (a, b) in edges {
            if a == b || !seen.insert(canonical_pair(a, b)) {
                continue;
            }
            let slot_a = graph.slot_or_insert(a);
            let slot_b = graph.slot_or_insert(b);
            if let Some(list) = graph.neighbors.get_mut(slot_a) {
                list.push(slot_b);
            }
            if let Some(list) = graph.neighbors.get_mut(slot_b) {
                list.push(slot_a);
            }
            graph.edges.push((a, b));
        }

        graph
    }

    fn slot_or_insert(&mut self, node: T) -> usize {
        if let Some(&slot) = self.index.get(&node) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(node);
        self.neighbors.push(Vec::new());
        self.index.insert(node, slot);
        slot
    }

    /// Nodes in traversal order
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Edges in insertion order, as given
    pub fn edges(&self) -> &[(T, T)] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Test if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Test node membership
    pub fn contains(&self, node: T) -> bool {
        self.index.contains_key(&node)
    }

    /// Position of `node` in traversal order
    pub fn slot(&self, node: T) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Neighbor slots of the node at `slot`
    pub fn neighbor_slots(&self, slot: usize) -> &[usize] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Neighbors of `node`, in edge insertion order
    pub fn neighbors(&self, node: T) -> impl Iterator<Item = T> + '_ {
        self.slot(node)
            .map(|slot| self.neighbor_slots(slot))
            .unwrap_or_default()
            .iter()
            .filter_map(|&slot| self.nodes.get(slot).copied())
    }

    /// Number of neighbors of `node`; zero for unknown nodes
    pub fn degree(&self, node: T) -> usize {
        self.slot(node)
            .map_or(0, |slot| self.neighbor_slots(slot).len())
    }

    /// Largest node degree; zero for an empty graph
    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Test whether `a` and `b` share an edge
    pub fn has_edge(&self, a: T, b: T) -> bool {
        match (self.slot(a), self.slot(b)) {
            (Some(slot_a), Some(slot_b)) => self.neighbor_slots(slot_a).contains(&slot_b),
            _ => false,
        }
    }
}
