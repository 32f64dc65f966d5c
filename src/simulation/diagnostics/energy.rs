use super::WaveIntegrator;

/// `Σv² + uᵀKu` with `K = center·I - coupling·N`.
///
/// With fixed edges K is symmetric positive definite; for beta = 1/4 and
/// consistent accelerations the damped scheme never increases this value.
pub(super) fn energy(wave: &WaveIntegrator) -> f64 {
    let k = &wave.coefficients;
    let boundary = wave.params.boundary;
    let u = wave.displacement.as_slice();

    let kinetic = wave.velocity.norm_squared();
    let potential: f64 = u
        .iter()
        .enumerate()
        .map(|(idx, &ui)| {
            let coupled = wave.grid.neighbor_sum(u, idx, boundary);
            ui * (k.stiffness_center * ui - k.stiffness_coupling * coupled)
        })
        .sum();

    kinetic + potential
}
