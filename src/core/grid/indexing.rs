use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// 1 for a line, 2 for a lattice
    #[inline]
    pub fn dimensions(&self) -> usize { self.dimensions }

    /// Number of stencil neighbors of an interior cell (2 per axis)
    #[inline]
    pub fn stencil_width(&self) -> f64 { (2 * self.dimensions) as f64 }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    /// Index of the cell at `x` in [0, 1] along a line, clamped.
    /// Maps 0.0 to the first cell and 1.0 to the last.
    pub fn index_from_unit(&self, x: f64) -> usize {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        ((self.size - 1) as f64 * x).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_index_is_row_major() {
        let grid = Grid::lattice(4, 3);
        assert_eq!(grid.index(1, 2), 9);
        assert_eq!(grid.coords(9), (1, 2));
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.dimensions(), 2);
    }

    #[test]
    fn line_has_single_row() {
        let grid = Grid::line(7);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.coords(6), (6, 0));
        assert_eq!(grid.stencil_width(), 2.0);
    }

    #[test]
    fn unit_position_clamps_to_line() {
        let grid = Grid::line(512);
        assert_eq!(grid.index_from_unit(-3.0), 0);
        assert_eq!(grid.index_from_unit(0.5), 255);
        assert_eq!(grid.index_from_unit(1.0), 511);
        assert_eq!(grid.index_from_unit(7.0), 511);
        assert_eq!(grid.index_from_unit(f64::NAN), 0);
    }

    #[test]
    fn bounds_reject_negative_and_overflow() {
        let grid = Grid::lattice(8, 8);
        assert!(grid.in_bounds(0, 7));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(8, 0));
    }
}
