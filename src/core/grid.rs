//! Grid - fixed topology shared by every field, the stencil matrix and the RHS
//!
//! A 1D line of `length` cells or a 2D lattice of `width x height` cells.
//! Both use a single linear index: `x + y * width`.
//!
//! Neighbor enumeration lives here and nowhere else, so the matrix assembly
//! and the right-hand side see exactly the same boundary handling.

use serde::{Deserialize, Serialize};

mod indexing;
mod neighbors;

/// Edge treatment: the missing neighbor is replaced by `coefficient()` times
/// the one real neighbor on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Multiplier 1 ("constant" edge in the demos)
    #[default]
    Fixed,
    /// Multiplier 2, mirror image of the inner neighbor
    Free,
}

impl Boundary {
    #[inline]
    pub fn coefficient(self) -> f64 {
        match self {
            Boundary::Fixed => 1.0,
            Boundary::Free => 2.0,
        }
    }

    /// Only the two supported multipliers map to a boundary
    pub fn from_coefficient(coefficient: u32) -> Option<Self> {
        match coefficient {
            1 => Some(Boundary::Fixed),
            2 => Some(Boundary::Free),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    size: usize,
    dimensions: usize,
}

impl Grid {
    /// 1D grid. Callers guarantee `length >= 2`.
    pub fn line(length: usize) -> Self {
        debug_assert!(length >= 2, "line grid needs at least 2 cells, got {}", length);
        Self {
            width: length,
            height: 1,
            size: length,
            dimensions: 1,
        }
    }

    /// 2D grid. Callers guarantee both extents `>= 2`.
    pub fn lattice(width: usize, height: usize) -> Self {
        debug_assert!(
            width >= 2 && height >= 2,
            "lattice grid needs at least 2x2 cells, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            size: width * height,
            dimensions: 2,
        }
    }
}
