use wasm_bindgen::prelude::*;

use crate::solver::SolveReport;

/// Snapshot of the last step. Timings stay zero unless perf metrics are
/// enabled; solver telemetry is always filled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) rhs_ms: f64,
    pub(crate) solve_ms: f64,
    pub(crate) update_ms: f64,

    pub(crate) solver_iterations: u32,
    pub(crate) solver_converged: bool,
    pub(crate) solver_max_delta: f64,

    pub(crate) cells: u32,
    pub(crate) memory_bytes: u32,
    pub(crate) steps: u64,
}

impl PerfStats {
    pub(crate) fn reset_timings(&mut self) {
        self.step_ms = 0.0;
        self.rhs_ms = 0.0;
        self.solve_ms = 0.0;
        self.update_ms = 0.0;
    }

    pub(crate) fn record_solve(&mut self, report: &SolveReport) {
        self.solver_iterations = report.iterations as u32;
        self.solver_converged = report.converged;
        self.solver_max_delta = report.max_delta;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn rhs_ms(&self) -> f64 { self.rhs_ms }
    #[wasm_bindgen(getter)]
    pub fn solve_ms(&self) -> f64 { self.solve_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn solver_iterations(&self) -> u32 { self.solver_iterations }
    #[wasm_bindgen(getter)]
    pub fn solver_converged(&self) -> bool { self.solver_converged }
    #[wasm_bindgen(getter)]
    pub fn solver_max_delta(&self) -> f64 { self.solver_max_delta }
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> u32 { self.cells }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u64 { self.steps }
}
