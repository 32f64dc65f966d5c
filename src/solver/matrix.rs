//! StencilMatrix - the implicit system `A·x = b` in fixed 3-/5-point form
//!
//! Rows are stored flat: `entries[row_start[r]..row_start[r + 1]]` are the
//! off-diagonal `(coefficient, column)` pairs of row `r`. The diagonal is kept
//! apart because the sweep divides by it.

use crate::core::{Boundary, Grid};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StencilMatrix {
    diagonal: Vec<f64>,
    entries: Vec<(f64, usize)>,
    row_start: Vec<usize>,
}

impl StencilMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a fresh matrix for `grid`
    pub fn assemble(grid: &Grid, boundary: Boundary, diagonal: f64, off_diagonal: f64) -> Self {
        let mut matrix = Self::new();
        matrix.rebuild(grid, boundary, diagonal, off_diagonal);
        matrix
    }

    /// Rebuild every row from scratch, reusing the existing storage.
    ///
    /// Interior neighbors get `off_diagonal`; an edge cell's single neighbor on
    /// an axis gets `boundary * off_diagonal`. Same inputs, same bits.
    pub fn rebuild(&mut self, grid: &Grid, boundary: Boundary, diagonal: f64, off_diagonal: f64) {
        debug_assert!(
            diagonal != 0.0 && diagonal.is_finite(),
            "stencil diagonal must be finite and non-zero, got {}",
            diagonal
        );

        let size = grid.size();
        self.diagonal.clear();
        self.diagonal.resize(size, diagonal);

        self.entries.clear();
        self.row_start.clear();
        self.row_start.reserve(size + 1);
        for idx in 0..size {
            self.row_start.push(self.entries.len());
            let entries = &mut self.entries;
            grid.for_each_neighbor(idx, boundary, |weight, neighbor| {
                entries.push((weight * off_diagonal, neighbor));
            });
        }
        self.row_start.push(self.entries.len());
    }

    /// Number of rows (= grid cells)
    #[inline]
    pub fn rows(&self) -> usize { self.diagonal.len() }

    #[inline]
    pub fn diagonal(&self, row: usize) -> f64 {
        *fast!(self.diagonal, [row])
    }

    /// Off-diagonal `(coefficient, column)` pairs of `row`, in stencil order
    #[inline]
    pub fn row(&self, row: usize) -> &[(f64, usize)] {
        let start = *fast!(self.row_start, [row]);
        let end = *fast!(self.row_start, [row + 1]);
        &self.entries[start..end]
    }

    /// Dense view of a single entry (0.0 where the stencil has none)
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        if row == col {
            return self.diagonal(row);
        }
        self.row(row)
            .iter()
            .filter(|&&(_, c)| c == col)
            .map(|&(coefficient, _)| coefficient)
            .sum()
    }

    /// out = A·x
    pub fn multiply(&self, x: &[f64], out: &mut [f64]) {
        debug_assert_eq!(x.len(), self.rows());
        debug_assert_eq!(out.len(), self.rows());
        for (row, slot) in out.iter_mut().enumerate() {
            let mut sum = self.diagonal(row) * x[row];
            for &(coefficient, col) in self.row(row) {
                sum += coefficient * *fast!(x, [col]);
            }
            *slot = sum;
        }
    }

    /// Bitwise equality, stricter than `==` for NaN and signed zero
    pub fn bit_identical(&self, other: &StencilMatrix) -> bool {
        self.row_start == other.row_start
            && self.diagonal.len() == other.diagonal.len()
            && self
                .diagonal
                .iter()
                .zip(&other.diagonal)
                .all(|(a, b)| a.to_bits() == b.to_bits())
            && self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.0.to_bits() == b.0.to_bits() && a.1 == b.1)
    }
}
