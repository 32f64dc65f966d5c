use crate::core::Field;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::coefficients::Coefficients;
use super::history::AccelerationHistory;

/// Newmark-beta field update once the current acceleration is solved.
/// Each cell is independent, so the parallel and sequential paths agree bit for bit.
pub(super) fn advance_fields(
    k: &Coefficients,
    displacement: &mut Field,
    velocity: &mut Field,
    history: &AccelerationHistory,
) {
    let previous = history.previous().as_slice();
    let current = history.current().as_slice();
    let u = displacement.as_mut_slice();
    let v = velocity.as_mut_slice();

    #[cfg(feature = "parallel")]
    {
        u.par_iter_mut()
            .zip(v.par_iter_mut())
            .zip(previous.par_iter().zip(current.par_iter()))
            .for_each(|((u, v), (&a_prev, &a_curr))| advance_cell(k, u, v, a_prev, a_curr));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for ((u, v), (&a_prev, &a_curr)) in u
            .iter_mut()
            .zip(v.iter_mut())
            .zip(previous.iter().zip(current.iter()))
        {
            advance_cell(k, u, v, a_prev, a_curr);
        }
    }
}

#[inline(always)]
fn advance_cell(k: &Coefficients, u: &mut f64, v: &mut f64, a_prev: f64, a_curr: f64) {
    // u reads the old velocity
    *u = (*u + k.time_step * *v + k.c3 * a_prev + k.c8 * a_curr) * k.attenuation;
    *v += k.half_step * (a_prev + a_curr);
}
