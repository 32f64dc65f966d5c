use std::mem::size_of;

use crate::core::{Field, Grid};
use crate::domain::{PickTarget, WaveParams};
use crate::solver::{IterativeSolver, SolveReport, StencilMatrix, DEFAULT_MAX_ITERATION, DEFAULT_TOLERANCE};

use super::coefficients::Coefficients;
use super::history::AccelerationHistory;
use super::perf_stats::PerfStats;
use super::WaveIntegrator;

/// Iteration cap for lattices: the 2D demo trades accuracy for frame rate
pub(super) const LATTICE_MAX_ITERATION: usize = 8;

pub(super) fn create_wave_integrator(grid: Grid, params: WaveParams) -> WaveIntegrator {
    let size = grid.size();
    let coefficients = Coefficients::derive(&params, grid.dimensions());
    let matrix = StencilMatrix::assemble(
        &grid,
        params.boundary,
        coefficients.diagonal,
        coefficients.off_diagonal,
    );

    let lattice = grid.dimensions() == 2;
    let max_iteration = if lattice { LATTICE_MAX_ITERATION } else { DEFAULT_MAX_ITERATION };
    let pick_target = if lattice && params.damping.is_damped() {
        PickTarget::Acceleration
    } else {
        PickTarget::Displacement
    };

    let perf_stats = PerfStats {
        cells: size as u32,
        memory_bytes: estimate_memory_bytes(&matrix, size) as u32,
        ..PerfStats::default()
    };

    WaveIntegrator {
        grid,
        params,
        coefficients,
        matrix,
        solver: IterativeSolver::new(DEFAULT_TOLERANCE, max_iteration),

        displacement: Field::zeros(size),
        velocity: Field::zeros(size),
        acceleration: AccelerationHistory::new(size),
        rhs: Field::zeros(size),
        pick: None,
        pick_target,
        steps: 0,

        // Starts "converged" so the first failing solve is reported
        last_solve: SolveReport {
            converged: true,
            ..SolveReport::default()
        },
        perf_enabled: false,
        perf_stats,
    }
}

/// Five fields (u, v, two acceleration slots, rhs), the solver snapshot and the matrix
fn estimate_memory_bytes(matrix: &StencilMatrix, size: usize) -> usize {
    let fields = 6 * size * size_of::<f64>();
    let entries: usize = (0..matrix.rows()).map(|row| matrix.row(row).len()).sum();
    let matrix_bytes = matrix.rows() * (size_of::<f64>() + size_of::<usize>())
        + entries * size_of::<(f64, usize)>();
    fields + matrix_bytes
}
