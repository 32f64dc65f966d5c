//! Symmetric relaxation solver for `StencilMatrix · x = b`
//!
//! One iteration = forward sweep + backward sweep. Convergence is judged on
//! the change across the backward sweep; hitting `max_iteration` is silent and
//! the best iterate is kept.

use serde::{Deserialize, Serialize};

use super::matrix::StencilMatrix;

pub const DEFAULT_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_MAX_ITERATION: usize = 1024;
pub const DEFAULT_JACOBI_OMEGA: f64 = 2.0 / 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Smoother {
    /// In-place update, each row sees the freshest neighbor values
    #[default]
    GaussSeidel,
    /// Neighbors read from the last snapshot, update blended by `omega`
    WeightedJacobi {
        #[serde(default = "default_omega")]
        omega: f64,
    },
}

fn default_omega() -> f64 {
    DEFAULT_JACOBI_OMEGA
}

/// What the last solve did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolveReport {
    /// Completed forward+backward iterations
    pub iterations: usize,
    pub converged: bool,
    /// max |x - x_prev| at the final check
    pub max_delta: f64,
}

#[derive(Clone, Debug)]
pub struct IterativeSolver {
    pub tolerance: f64,
    pub max_iteration: usize,
    pub smoother: Smoother,
    x_prev: Vec<f64>,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATION)
    }
}

impl IterativeSolver {
    pub fn new(tolerance: f64, max_iteration: usize) -> Self {
        Self {
            tolerance,
            max_iteration,
            smoother: Smoother::GaussSeidel,
            x_prev: Vec::new(),
        }
    }

    pub fn with_smoother(mut self, smoother: Smoother) -> Self {
        self.smoother = smoother;
        self
    }

    /// Solve into a new vector
    pub fn solve(&mut self, matrix: &StencilMatrix, b: &[f64]) -> Vec<f64> {
        let mut x = vec![0.0; matrix.rows()];
        self.solve_into(matrix, b, &mut x);
        x
    }

    /// Solve into `x`, which is zeroed first. No allocation once the scratch
    /// buffer has grown to the matrix size.
    pub fn solve_into(&mut self, matrix: &StencilMatrix, b: &[f64], x: &mut [f64]) -> SolveReport {
        let rows = matrix.rows();
        debug_assert_eq!(b.len(), rows);
        debug_assert_eq!(x.len(), rows);

        if self.x_prev.len() != rows {
            self.x_prev.resize(rows, 0.0);
        }
        x.fill(0.0);

        let mut report = SolveReport::default();
        for _ in 0..self.max_iteration {
            self.x_prev.copy_from_slice(x);
            self.sweep(matrix, b, x, false);

            self.x_prev.copy_from_slice(x);
            self.sweep(matrix, b, x, true);

            report.iterations += 1;
            let (converged, max_delta) = self.check_tolerance(x);
            report.converged = converged;
            report.max_delta = max_delta;
            if converged {
                break;
            }
        }
        report
    }

    fn sweep(&self, matrix: &StencilMatrix, b: &[f64], x: &mut [f64], backward: bool) {
        let rows = matrix.rows();
        match self.smoother {
            Smoother::GaussSeidel => {
                if backward {
                    for row in (0..rows).rev() {
                        let value = relax_row(matrix, b, x, row);
                        fast!(x, [row] = value);
                    }
                } else {
                    for row in 0..rows {
                        let value = relax_row(matrix, b, x, row);
                        fast!(x, [row] = value);
                    }
                }
            }
            Smoother::WeightedJacobi { omega } => {
                let prev = &self.x_prev;
                let blend = 1.0 - omega;
                let mut update = |row: usize| {
                    let value = omega * relax_row(matrix, b, prev, row) + blend * *fast!(prev, [row]);
                    fast!(x, [row] = value);
                };
                if backward {
                    (0..rows).rev().for_each(&mut update);
                } else {
                    (0..rows).for_each(&mut update);
                }
            }
        }
    }

    /// (all |x - x_prev| <= tolerance, max |x - x_prev|)
    fn check_tolerance(&self, x: &[f64]) -> (bool, f64) {
        let mut converged = true;
        let mut max_delta: f64 = 0.0;
        for (now, before) in x.iter().zip(&self.x_prev) {
            let delta = (now - before).abs();
            // NaN fails the comparison and marks the solve unconverged
            if !(delta <= self.tolerance) {
                converged = false;
            }
            max_delta = max_delta.max(delta);
        }
        (converged, max_delta)
    }
}

/// (b[row] - Σ offdiag·x[col]) / diag
#[inline(always)]
fn relax_row(matrix: &StencilMatrix, b: &[f64], x: &[f64], row: usize) -> f64 {
    let mut sum = *fast!(b, [row]);
    for &(coefficient, col) in matrix.row(row) {
        sum -= coefficient * *fast!(x, [col]);
    }
    sum / matrix.diagonal(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Boundary, Grid};
    use approx::assert_abs_diff_eq;

    fn rhs_for(matrix: &StencilMatrix, x: &[f64]) -> Vec<f64> {
        let mut b = vec![0.0; x.len()];
        matrix.multiply(x, &mut b);
        b
    }

    #[test]
    fn gauss_seidel_recovers_known_solution_on_line() {
        let matrix = StencilMatrix::assemble(&Grid::line(5), Boundary::Fixed, 4.0, -1.0);
        let expected = [1.0, -2.0, 3.0, 0.5, 5.0];
        let b = rhs_for(&matrix, &expected);

        let mut solver = IterativeSolver::new(1e-12, 200);
        let x = solver.solve(&matrix, &b);

        for (got, want) in x.iter().zip(&expected) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn gauss_seidel_solves_small_lattice_with_free_edges() {
        let matrix = StencilMatrix::assemble(&Grid::lattice(2, 2), Boundary::Free, 5.0, -0.5);
        let expected = [0.25, 1.0, -0.75, 2.0];
        let b = rhs_for(&matrix, &expected);

        let mut solver = IterativeSolver::new(1e-12, 100);
        let mut x = [0.0; 4];
        let report = solver.solve_into(&matrix, &b, &mut x);

        assert!(report.converged);
        assert!(report.iterations < 100);
        for (got, want) in x.iter().zip(&expected) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn weighted_jacobi_converges_on_dominant_system() {
        let matrix = StencilMatrix::assemble(&Grid::line(5), Boundary::Free, 6.0, -1.0);
        let expected = [2.0, 1.0, 0.0, -1.0, -2.0];
        let b = rhs_for(&matrix, &expected);

        let mut solver = IterativeSolver::new(1e-12, 500)
            .with_smoother(Smoother::WeightedJacobi { omega: DEFAULT_JACOBI_OMEGA });
        let mut x = [0.0; 5];
        let report = solver.solve_into(&matrix, &b, &mut x);

        assert!(report.converged);
        for (got, want) in x.iter().zip(&expected) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn iteration_cap_is_silent_and_reported() {
        let matrix = StencilMatrix::assemble(&Grid::line(32), Boundary::Fixed, 2.01, -1.0);
        let b = vec![1.0; 32];

        let mut solver = IterativeSolver::new(1e-15, 2);
        let mut x = vec![0.0; 32];
        let report = solver.solve_into(&matrix, &b, &mut x);

        assert_eq!(report.iterations, 2);
        assert!(!report.converged);
        assert!(report.max_delta > 1e-15);
        assert!(x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_rhs_converges_immediately_to_zero() {
        let matrix = StencilMatrix::assemble(&Grid::lattice(4, 4), Boundary::Fixed, 3.0, -0.5);
        let mut solver = IterativeSolver::default();
        let mut x = vec![7.0; 16];
        let report = solver.solve_into(&matrix, &vec![0.0; 16], &mut x);

        assert_eq!(report.iterations, 1);
        assert!(report.converged);
        assert!(x.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn smoother_round_trips_through_json() {
        let smoother: Smoother = serde_json::from_str(r#"{"kind":"weighted_jacobi"}"#).unwrap();
        assert_eq!(smoother, Smoother::WeightedJacobi { omega: DEFAULT_JACOBI_OMEGA });
        let smoother: Smoother = serde_json::from_str(r#"{"kind":"gauss_seidel"}"#).unwrap();
        assert_eq!(smoother, Smoother::GaussSeidel);
    }
}
