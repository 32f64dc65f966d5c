use crate::core::{Boundary, Field, Grid};

use super::coefficients::Coefficients;

/// Right-hand side of the implicit acceleration solve:
/// `b = S·(N(u) + dt·N(v) + C3·N(a_prev)) - C4·a_prev - C5·v - C6·u`
///
/// Neighbor sums go through `Grid::neighbor_sum`, the same enumeration the
/// matrix is assembled from.
pub(super) fn assemble_rhs(
    grid: &Grid,
    boundary: Boundary,
    k: &Coefficients,
    displacement: &Field,
    velocity: &Field,
    previous: &Field,
    rhs: &mut Field,
) {
    let u = displacement.as_slice();
    let v = velocity.as_slice();
    let a = previous.as_slice();
    let dt = k.time_step;

    for (idx, slot) in rhs.as_mut_slice().iter_mut().enumerate() {
        let neighbors = grid.neighbor_sum(u, idx, boundary)
            + dt * grid.neighbor_sum(v, idx, boundary)
            + k.c3 * grid.neighbor_sum(a, idx, boundary);
        let (ui, vi, ai) = (*fast!(u, [idx]), *fast!(v, [idx]), *fast!(a, [idx]));
        *slot = k.stencil_scale * neighbors - k.c4 * ai - k.c5 * vi - k.c6 * ui;
    }
}
