//! WaveIntegrator - implicit Newmark-beta wave propagation
//!
//! One instance owns every buffer of one simulation:
//! - displacement `u`, velocity `v`
//! - a two-slot acceleration history (parity flip per step)
//! - the stencil matrix, rebuilt in full whenever a constant changes
//! - the iterative solver and its scratch
//!
//! The caller drives time: one `step()` advances exactly one `dt`.
//! Works for a 1D line and a 2D lattice, undamped or viscous/stiffness damped.

use crate::core::{Boundary, Field, Grid};
use crate::domain::{Damping, PickOverride, PickTarget, SolverSettings, WaveParams};
use crate::solver::{IterativeSolver, Smoother, SolveReport, StencilMatrix};

mod history;
#[path = "init/coefficients.rs"]
mod coefficients;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/rhs.rs"]
mod rhs;
#[path = "step/newmark.rs"]
mod newmark;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "diagnostics/energy.rs"]
mod energy;
mod facade;

pub use coefficients::Coefficients;
pub use facade::Wave;
pub use history::AccelerationHistory;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct WaveIntegrator {
    grid: Grid,
    params: WaveParams,
    coefficients: Coefficients,
    matrix: StencilMatrix,
    solver: IterativeSolver,

    // State
    displacement: Field,
    velocity: Field,
    acceleration: AccelerationHistory,
    rhs: Field,
    pick: Option<PickOverride>,
    pick_target: PickTarget,
    steps: u64,

    // Telemetry
    last_solve: SolveReport,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WaveIntegrator {
    /// Allocate all fields, derive the coefficients and assemble the matrix.
    /// Inputs are trusted; validate them with `domain::preset` first.
    pub fn new(grid: Grid, params: WaveParams) -> Self {
        init::create_wave_integrator(grid, params)
    }

    // === Read surface ===

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn params(&self) -> &WaveParams { &self.params }

    pub fn coefficients(&self) -> &Coefficients { &self.coefficients }

    pub fn matrix(&self) -> &StencilMatrix { &self.matrix }

    pub fn solver(&self) -> &IterativeSolver { &self.solver }

    /// Current displacement, one sample per cell (for rendering)
    pub fn displacement(&self) -> &[f64] { self.displacement.as_slice() }

    pub fn displacement_ptr(&self) -> *const f64 { self.displacement.as_ptr() }

    /// Steps taken since construction (reset does not rewind it)
    pub fn steps(&self) -> u64 { self.steps }

    /// Solver outcome of the most recent step
    pub fn last_solve(&self) -> SolveReport { self.last_solve }

    /// Discrete energy `Σv² + uᵀKu`
    pub fn energy(&self) -> f64 {
        energy::energy(self)
    }

    // === Constants (each setter rebuilds the matrix) ===

    /// Re-derive every coefficient and rebuild the stencil matrix from scratch
    pub fn refresh_constants(&mut self) {
        settings::refresh_constants(self);
    }

    pub fn set_params(&mut self, params: WaveParams) {
        settings::set_params(self, params);
    }

    pub fn set_wave_speed(&mut self, wave_speed: f64) {
        settings::set_wave_speed(self, wave_speed);
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        settings::set_spacing(self, spacing);
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        settings::set_time_step(self, time_step);
    }

    pub fn set_beta(&mut self, beta: f64) {
        settings::set_beta(self, beta);
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        settings::set_boundary(self, boundary);
    }

    pub fn set_damping(&mut self, damping: Damping) {
        settings::set_damping(self, damping);
    }

    /// Returns false (and changes nothing) for a damped wave
    pub fn set_attenuation(&mut self, attenuation: f64) -> bool {
        settings::set_attenuation(self, attenuation)
    }

    /// Returns false (and changes nothing) for an undamped wave
    pub fn set_viscosity(&mut self, viscosity: f64) -> bool {
        settings::set_viscosity(self, viscosity)
    }

    /// Returns false (and changes nothing) for an undamped wave
    pub fn set_stiffness(&mut self, stiffness: f64) -> bool {
        settings::set_stiffness(self, stiffness)
    }

    // === Solver knobs ===

    pub fn set_tolerance(&mut self, tolerance: f64) {
        settings::set_tolerance(self, tolerance);
    }

    /// Higher values trade step cost for stability when c·dt/dx is large
    pub fn set_max_iteration(&mut self, max_iteration: usize) {
        settings::set_max_iteration(self, max_iteration);
    }

    pub fn set_smoother(&mut self, smoother: Smoother) {
        settings::set_smoother(self, smoother);
    }

    pub fn configure_solver(&mut self, solver: &SolverSettings) {
        settings::configure_solver(self, solver);
    }

    // === Forcing ===

    /// Force `value` into the pick target at `index` after every step.
    /// An index outside the grid releases the pick; a zero value forces nothing.
    pub fn pick(&mut self, index: usize, value: f64) {
        commands::pick(self, index, value);
    }

    /// 1D helper: `x` in [0, 1] across the line (clamped)
    pub fn pick_normalized(&mut self, x: f64, value: f64) {
        commands::pick_normalized(self, x, value);
    }

    /// 2D helper: lattice coordinates, out-of-bounds releases the pick
    pub fn pick_cell(&mut self, x: i64, y: i64, value: f64) {
        commands::pick_cell(self, x, y, value);
    }

    pub fn release_pick(&mut self) {
        commands::release_pick(self);
    }

    pub fn pick_override(&self) -> Option<PickOverride> { self.pick }

    pub fn pick_target(&self) -> PickTarget { self.pick_target }

    pub fn set_pick_target(&mut self, target: PickTarget) {
        self.pick_target = target;
    }

    /// Zero displacement, velocity and both acceleration slots.
    /// The matrix and the pick are left alone.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === Driving ===

    /// Advance one time step
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance `count` time steps (several per animation frame)
    pub fn step_many(&mut self, count: u32) {
        for _ in 0..count {
            step::step(self);
        }
    }

    // === Perf ===

    /// Enable or disable per-step timings (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
