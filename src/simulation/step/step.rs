use crate::solver::SolveReport;

use super::commands::apply_pick;
use super::newmark::advance_fields;
use super::rhs::assemble_rhs;
use super::{PerfTimer, WaveIntegrator};

pub(super) fn step(wave: &mut WaveIntegrator) {
    let perf_on = wave.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // Last step's "current" becomes "previous"; the other slot is overwritten by the solve
    wave.acceleration.rotate();

    assemble_rhs(
        &wave.grid,
        wave.params.boundary,
        &wave.coefficients,
        &wave.displacement,
        &wave.velocity,
        wave.acceleration.previous(),
        &mut wave.rhs,
    );
    let rhs_ms = timer.as_mut().map_or(0.0, PerfTimer::lap_ms);

    let (current, _) = wave.acceleration.split_mut();
    let report = wave
        .solver
        .solve_into(&wave.matrix, wave.rhs.as_slice(), current.as_mut_slice());
    let solve_ms = timer.as_mut().map_or(0.0, PerfTimer::lap_ms);

    advance_fields(
        &wave.coefficients,
        &mut wave.displacement,
        &mut wave.velocity,
        &wave.acceleration,
    );
    apply_pick(wave);
    let update_ms = timer.as_mut().map_or(0.0, PerfTimer::lap_ms);

    wave.steps += 1;
    record_solve(wave, report);

    if let Some(timer) = timer {
        let stats = &mut wave.perf_stats;
        stats.rhs_ms = rhs_ms;
        stats.solve_ms = solve_ms;
        stats.update_ms = update_ms;
        stats.step_ms = timer.elapsed_ms();
    }
}

fn record_solve(wave: &mut WaveIntegrator, report: SolveReport) {
    if wave.last_solve.converged && !report.converged {
        console_warn!(
            "wave solver stopped converging after {} iterations (max delta {:e}, tolerance {:e})",
            report.iterations,
            report.max_delta,
            wave.solver.tolerance
        );
    }
    wave.last_solve = report;
    wave.perf_stats.record_solve(&report);
    wave.perf_stats.steps = wave.steps;
}
