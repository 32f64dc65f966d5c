use crate::domain::{PickOverride, PickTarget};

use super::WaveIntegrator;

pub(super) fn pick(wave: &mut WaveIntegrator, index: usize, value: f64) {
    if index >= wave.grid.size() {
        wave.pick = None;
        return;
    }
    wave.pick = Some(PickOverride { index, value });
}

pub(super) fn pick_normalized(wave: &mut WaveIntegrator, x: f64, value: f64) {
    let index = wave.grid.index_from_unit(x);
    pick(wave, index, value);
}

pub(super) fn pick_cell(wave: &mut WaveIntegrator, x: i64, y: i64, value: f64) {
    if !wave.grid.in_bounds(x, y) {
        wave.pick = None;
        return;
    }
    let index = wave.grid.index(x as usize, y as usize);
    pick(wave, index, value);
}

pub(super) fn release_pick(wave: &mut WaveIntegrator) {
    wave.pick = None;
}

pub(super) fn reset(wave: &mut WaveIntegrator) {
    wave.displacement.reset();
    wave.velocity.reset();
    wave.acceleration.reset();
    wave.rhs.reset();
}

/// Runs after the Newmark update so the forced sample wins over the physics
pub(super) fn apply_pick(wave: &mut WaveIntegrator) {
    let Some(pick) = wave.pick else {
        return;
    };
    if !pick.is_active() {
        return;
    }
    match wave.pick_target {
        PickTarget::Displacement => wave.displacement[pick.index] = pick.value,
        PickTarget::Acceleration => wave.acceleration.current_mut()[pick.index] = pick.value,
    }
}
