//! Neighbor stencils defining which cells count as spatially adjacent

use crate::io::error::{MapColorError, Result};

/// Cardinal offsets as `[row, col]`: left, right, down, up
pub const CARDINAL_OFFSETS: [[isize; 2]; 4] = [[0, -1], [0, 1], [1, 0], [-1, 0]];

/// Diagonal offsets as `[row, col]`
pub const DIAGONAL_OFFSETS: [[isize; 2]; 4] = [[-1, -1], [1, -1], [1, 1], [-1, 1]];

/// Named stencil variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Connectivity {
    /// Edge neighbors only
    Four,
    /// Edge and corner neighbors
    #[default]
    Eight,
}

/// Ordered, non-empty list of relative neighbor offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stencil {
    offsets: Vec<[isize; 2]>,
}

impl Stencil {
    /// Validate a custom offset list
    ///
    /// # Errors
    ///
    /// Returns an error if `offsets` is empty or contains `[0, 0]`
    pub fn new(offsets: Vec<[isize; 2]>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(MapColorError::InvalidStencil {
                reason: "stencil must contain at least one offset".to_string(),
            });
        }
        if offsets.contains(&[0, 0]) {
            return Err(MapColorError::InvalidStencil {
                reason: "offset (0, 0) compares a cell with itself".to_string(),
            });
        }
        Ok(Self { offsets })
    }

    /// Cardinal neighbors
    pub fn four() -> Self {
        Self {
            offsets: CARDINAL_OFFSETS.to_vec(),
        }
    }

    /// Cardinal and diagonal neighbors
    pub fn eight() -> Self {
        let mut offsets = CARDINAL_OFFSETS.to_vec();
        offsets.extend_from_slice(&DIAGONAL_OFFSETS);
        Self { offsets }
    }

    /// Offsets in stencil order
    pub fn offsets(&self) -> &[[isize; 2]] {
        &self.offsets
    }

    /// Number of offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false for a validated stencil
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl From<Connectivity> for Stencil {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => Self::four(),
            Connectivity::Eight => Self::eight(),
        }
    }
}
