use crate::domain::{Damping, WaveParams};

/// Scalars derived from the physical constants and the grid dimension.
///
/// Both variants share one right-hand side:
/// `b = S·(N(u) + dt·N(v) + C3·N(a_prev)) - C4·a_prev - C5·v - C6·u`
/// and one update:
/// `u += dt·v + C3·a_prev + C8·a_curr`, `v += C7·(a_prev + a_curr)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    /// C0, every row
    pub diagonal: f64,
    /// C1, interior neighbor (edges get boundary × C1)
    pub off_diagonal: f64,
    /// S, scale on the neighbor sums
    pub stencil_scale: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub time_step: f64,
    /// C7 = dt / 2
    pub half_step: f64,
    pub c8: f64,
    /// Post-update displacement scale (1 when damped)
    pub attenuation: f64,
    /// K = center·I - coupling·N, used for the energy diagnostic
    pub stiffness_center: f64,
    pub stiffness_coupling: f64,
}

impl Coefficients {
    pub fn derive(params: &WaveParams, dimensions: usize) -> Self {
        let dt = params.time_step;
        let dt2 = dt * dt;
        let beta = params.beta;
        let neighbors = (2 * dimensions) as f64;
        let c3 = dt2 * (0.5 - beta);
        let c8 = dt2 * beta;
        let half_step = dt / 2.0;
        let coupling = (params.wave_speed / params.spacing).powi(2);

        match params.damping {
            // (dx/c)²·a = ∇²(u + dt·v + C3·a_prev + C8·a)
            Damping::Undamped { attenuation } => Self {
                diagonal: (params.spacing / params.wave_speed).powi(2) + neighbors * c8,
                off_diagonal: -c8,
                stencil_scale: 1.0,
                c3,
                c4: neighbors * c3,
                c5: neighbors * dt,
                c6: neighbors,
                time_step: dt,
                half_step,
                c8,
                attenuation,
                stiffness_center: neighbors * coupling,
                stiffness_coupling: coupling,
            },
            // (1 + a·dt/2 + β·dt²·K)·a = -K·(u + dt·v + C3·a_prev) - a·(v + dt/2·a_prev)
            Damping::Damped { viscosity, stiffness } => {
                let c2 = coupling;
                let c6 = stiffness + neighbors * c2;
                Self {
                    diagonal: 1.0 + viscosity * half_step + c6 * c8,
                    off_diagonal: -c2 * c8,
                    stencil_scale: c2,
                    c3,
                    c4: c3 * c6 + viscosity * half_step,
                    c5: viscosity + dt * c6,
                    c6,
                    time_step: dt,
                    half_step,
                    c8,
                    attenuation: 1.0,
                    stiffness_center: c6,
                    stiffness_coupling: c2,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn undamped_line_matches_newmark_demo_constants() {
        let params = WaveParams::undamped(4.0, 0.1, 1.0 / 60.0, 1.0);
        let k = Coefficients::derive(&params, 1);
        let dt2 = (1.0f64 / 60.0).powi(2);

        assert_relative_eq!(k.diagonal, (0.1f64 / 4.0).powi(2) + 2.0 * dt2 * 0.25);
        assert_relative_eq!(k.off_diagonal, -dt2 * 0.25);
        assert_relative_eq!(k.c3, dt2 / 2.0 - dt2 * 0.25);
        assert_relative_eq!(k.c8, -k.off_diagonal);
        assert_eq!(k.stencil_scale, 1.0);
        assert_eq!(k.c6, 2.0);
    }

    #[test]
    fn damped_lattice_uses_four_neighbors() {
        let params = WaveParams::damped(2.0, 0.5, 0.1, 1.0, 3.0);
        let k = Coefficients::derive(&params, 2);
        let c2 = 16.0;
        let c8 = 0.01 * 0.25;

        assert_relative_eq!(k.stencil_scale, c2);
        assert_relative_eq!(k.c6, 3.0 + 4.0 * c2);
        assert_relative_eq!(k.diagonal, 1.0 + 0.05 + k.c6 * c8);
        assert_relative_eq!(k.off_diagonal, -c2 * c8);
        assert_relative_eq!(k.c4, k.c3 * k.c6 + 0.05);
        assert_relative_eq!(k.c5, 1.0 + 0.1 * k.c6);
        assert_eq!(k.attenuation, 1.0);
    }

    #[test]
    fn diagonal_dominates_the_stencil() {
        for dims in [1, 2] {
            for params in [
                WaveParams::undamped(64.0, 0.1, 0.01, 1.0),
                WaveParams::damped(4.0, 0.1, 1.0 / 60.0, 0.0, 0.0),
            ] {
                let k = Coefficients::derive(&params, dims);
                let off_sum = (2 * dims) as f64 * k.off_diagonal.abs();
                assert!(k.diagonal > off_sum);
            }
        }
    }
}
