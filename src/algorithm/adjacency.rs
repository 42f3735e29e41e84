//! Region adjacency extraction by stencil scanning
//!
//! Every cell is compared with each in-bounds stencil neighbor; differently
//! labeled pairs are canonicalized as `(smaller, larger)` and deduplicated.
//! The resulting set is ordered by canonical pair, so its iteration order
//! depends only on its contents and never on scan order.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::spatial::{Raster, RegionId, Stencil};

/// Deduplicated set of canonical adjacency pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencySet<T> {
    pairs: BTreeSet<(T, T)>,
}

impl<T: RegionId> Default for AdjacencySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RegionId> AdjacencySet<T> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            pairs: BTreeSet::new(),
        }
    }

    /// Record that `a` and `b` touch
    ///
    /// Equal identifiers are ignored. Returns whether the pair was new.
    pub fn insert(&mut self, a: T, b: T) -> bool {
        if a == b {
            return false;
        }
        self.pairs.insert(canonical_pair(a, b))
    }

    /// Test whether `a` and `b` were recorded as adjacent, in either order
    pub fn contains(&self, a: T, b: T) -> bool {
        self.pairs.contains(&canonical_pair(a, b))
    }

    /// Union another partial set into this one
    ///
    /// Merging is commutative and associative, so partial results from
    /// independent windows may be combined in any order.
    pub fn merge(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Canonical pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Test if no pairs were recorded
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Copy the pairs into a vector, ascending
    pub fn to_vec(&self) -> Vec<(T, T)> {
        self.iter().collect()
    }
}

impl<T: RegionId> FromIterator<(T, T)> for AdjacencySet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}

/// Order two identifiers as `(smaller, larger)`
pub fn canonical_pair<T: RegionId>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Extract the adjacency relation of the whole raster
pub fn extract_adjacency<T: RegionId>(raster: &Raster<T>, stencil: &Stencil) -> AdjacencySet<T> {
    extract_adjacency_window(raster, stencil, 0..raster.rows(), 0..raster.cols())
}

/// Extract adjacency for source cells inside a rectangular window
///
/// Neighbors outside the window but inside the raster are still compared,
/// so the union of windows that cover the raster equals [`extract_adjacency`].
/// Window ranges are clamped to the raster.
pub fn extract_adjacency_window<T: RegionId>(
    raster: &Raster<T>,
    stencil: &Stencil,
    rows: Range<usize>,
    cols: Range<usize>,
) -> AdjacencySet<T> {
    let row_end = rows.end.min(raster.rows());
    let col_end = cols.end.min(raster.cols());

    let mut set = AdjacencySet::new();
    for row in rows.start..row_end {
        for col in cols.start..col_end {
            let Some(current) = raster.get(row, col) else {
                continue;
            };
            for &offset in stencil.offsets() {
                if let Some(neighbor) = raster.neighbor(row, col, offset) {
                    set.insert(current, neighbor);
                }
            }
        }
    }
    set
}
