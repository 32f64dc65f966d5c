use super::*;

impl Grid {
    /// Visit the stencil neighbors of `idx` as `(weight, neighbor_index)`.
    ///
    /// Per axis: an interior cell yields both neighbors with weight 1; an edge
    /// cell yields only its inner neighbor, weighted by the boundary coefficient.
    /// Axes are visited x first, then y; within an axis the lower index first.
    #[inline]
    pub fn for_each_neighbor<F: FnMut(f64, usize)>(&self, idx: usize, boundary: Boundary, mut f: F) {
        let b = boundary.coefficient();

        let x = idx % self.width;
        let x_last = self.width - 1;
        if x == 0 {
            f(b, idx + 1);
        } else if x == x_last {
            f(b, idx - 1);
        } else {
            f(1.0, idx - 1);
            f(1.0, idx + 1);
        }

        if self.dimensions == 2 {
            let y = idx / self.width;
            let y_last = self.height - 1;
            if y == 0 {
                f(b, idx + self.width);
            } else if y == y_last {
                f(b, idx - self.width);
            } else {
                f(1.0, idx - self.width);
                f(1.0, idx + self.width);
            }
        }
    }

    /// Weighted sum of the neighbors of `idx` in `values`
    #[inline]
    pub fn neighbor_sum(&self, values: &[f64], idx: usize, boundary: Boundary) -> f64 {
        let mut sum = 0.0;
        self.for_each_neighbor(idx, boundary, |weight, n| {
            sum += weight * *fast!(values, [n]);
        });
        sum
    }
}
