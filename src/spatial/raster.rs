//! Read-only labeled raster of integer region identifiers
//!
//! A raster is produced once by a loader and never mutated afterwards.
//! Equal identifiers denote the same region; identifiers carry no other
//! meaning and need not be contiguous.

use ndarray::Array2;
use num_traits::PrimInt;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use crate::io::error::{MapColorError, Result};

/// Integer type usable as a region identifier
pub trait RegionId: PrimInt + Hash + fmt::Debug + fmt::Display {}

impl<T> RegionId for T where T: PrimInt + Hash + fmt::Debug + fmt::Display {}

/// Fixed-size grid of region identifiers indexed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T> {
    cells: Array2<T>,
}

impl<T: RegionId> Raster<T> {
    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns an error if the array has zero rows or zero columns
    pub fn new(cells: Array2<T>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(MapColorError::InvalidRaster {
                reason: format!("raster must be at least 1x1, got {rows}x{cols}"),
            });
        }
        Ok(Self { cells })
    }

    /// Build a raster from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty,
    /// or the rows differ in length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MapColorError::InvalidRaster {
                    reason: format!(
                        "row {index} has {} cells, expected {width}",
                        row.len()
                    ),
                });
            }
            flat.extend(row);
        }

        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            MapColorError::InvalidRaster {
                reason: e.to_string(),
            }
        })?;
        Self::new(cells)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a raster holds at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Region identifier at `[row, col]`, or `None` outside the raster
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells.get([row, col]).copied()
    }

    /// Region identifier of the cell displaced from `[row, col]` by `offset`
    ///
    /// Displacements that leave the raster yield `None`; there is no wraparound.
    pub fn neighbor(&self, row: usize, col: usize, offset: [isize; 2]) -> Option<T> {
        let neighbor_row = row.checked_add_signed(offset[0])?;
        let neighbor_col = col.checked_add_signed(offset[1])?;
        self.get(neighbor_row, neighbor_col)
    }

    /// Underlying array view
    pub const fn cells(&self) -> &Array2<T> {
        &self.cells
    }

    /// Distinct region identifiers present in the raster, ascending
    pub fn region_ids(&self) -> BTreeSet<T> {
        self.cells.iter().copied().collect()
    }
}
