use crate::core::Boundary;
use crate::domain::{Damping, SolverSettings, WaveParams};
use crate::solver::Smoother;

use super::coefficients::Coefficients;
use super::WaveIntegrator;

pub(super) fn refresh_constants(wave: &mut WaveIntegrator) {
    wave.coefficients = Coefficients::derive(&wave.params, wave.grid.dimensions());
    wave.matrix.rebuild(
        &wave.grid,
        wave.params.boundary,
        wave.coefficients.diagonal,
        wave.coefficients.off_diagonal,
    );
}

pub(super) fn set_params(wave: &mut WaveIntegrator, params: WaveParams) {
    wave.params = params;
    refresh_constants(wave);
}

pub(super) fn set_wave_speed(wave: &mut WaveIntegrator, wave_speed: f64) {
    wave.params.wave_speed = wave_speed;
    refresh_constants(wave);
}

pub(super) fn set_spacing(wave: &mut WaveIntegrator, spacing: f64) {
    wave.params.spacing = spacing;
    refresh_constants(wave);
}

pub(super) fn set_time_step(wave: &mut WaveIntegrator, time_step: f64) {
    wave.params.time_step = time_step;
    refresh_constants(wave);
}

pub(super) fn set_beta(wave: &mut WaveIntegrator, beta: f64) {
    wave.params.beta = beta;
    refresh_constants(wave);
}

pub(super) fn set_boundary(wave: &mut WaveIntegrator, boundary: Boundary) {
    wave.params.boundary = boundary;
    refresh_constants(wave);
}

pub(super) fn set_damping(wave: &mut WaveIntegrator, damping: Damping) {
    wave.params.damping = damping;
    refresh_constants(wave);
}

pub(super) fn set_attenuation(wave: &mut WaveIntegrator, value: f64) -> bool {
    match &mut wave.params.damping {
        Damping::Undamped { attenuation } => *attenuation = value,
        Damping::Damped { .. } => return false,
    }
    refresh_constants(wave);
    true
}

pub(super) fn set_viscosity(wave: &mut WaveIntegrator, value: f64) -> bool {
    match &mut wave.params.damping {
        Damping::Damped { viscosity, .. } => *viscosity = value,
        Damping::Undamped { .. } => return false,
    }
    refresh_constants(wave);
    true
}

pub(super) fn set_stiffness(wave: &mut WaveIntegrator, value: f64) -> bool {
    match &mut wave.params.damping {
        Damping::Damped { stiffness, .. } => *stiffness = value,
        Damping::Undamped { .. } => return false,
    }
    refresh_constants(wave);
    true
}

// Solver knobs do not touch the matrix

pub(super) fn set_tolerance(wave: &mut WaveIntegrator, tolerance: f64) {
    wave.solver.tolerance = tolerance;
}

pub(super) fn set_max_iteration(wave: &mut WaveIntegrator, max_iteration: usize) {
    wave.solver.max_iteration = max_iteration;
}

pub(super) fn set_smoother(wave: &mut WaveIntegrator, smoother: Smoother) {
    wave.solver.smoother = smoother;
}

pub(super) fn configure_solver(wave: &mut WaveIntegrator, settings: &SolverSettings) {
    wave.solver.tolerance = settings.tolerance;
    wave.solver.max_iteration = settings.max_iteration;
    wave.solver.smoother = settings.smoother;
}

pub(super) fn enable_perf_metrics(wave: &mut WaveIntegrator, enabled: bool) {
    wave.perf_enabled = enabled;
    if !enabled {
        wave.perf_stats.reset_timings();
    }
}
