//! Physical constants of a wave simulation
//!
//! Everything here is mutable at runtime; every change goes through
//! `WaveIntegrator::refresh_constants`, which rebuilds the matrix.

use serde::{Deserialize, Serialize};

use crate::core::Boundary;

/// Nominal Newmark parameter (average acceleration)
pub const NEWMARK_BETA: f64 = 0.25;

fn default_beta() -> f64 {
    NEWMARK_BETA
}

fn default_attenuation() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Damping {
    /// Lossless equation; displacement is scaled by `attenuation` after each step
    Undamped {
        #[serde(default = "default_attenuation")]
        attenuation: f64,
    },
    /// `u'' = c²∇²u - a·u' - k·u`
    Damped {
        #[serde(alias = "a")]
        viscosity: f64,
        #[serde(alias = "k")]
        stiffness: f64,
    },
}

impl Damping {
    #[inline]
    pub fn is_damped(&self) -> bool {
        matches!(self, Damping::Damped { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// c
    #[serde(alias = "c")]
    pub wave_speed: f64,
    /// Δx
    #[serde(alias = "dx")]
    pub spacing: f64,
    /// Δt, simulated time per step
    #[serde(alias = "dt")]
    pub time_step: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default)]
    pub boundary: Boundary,
    pub damping: Damping,
}

impl WaveParams {
    /// Lossless wave with free edges (the plain Newmark demo)
    pub fn undamped(wave_speed: f64, spacing: f64, time_step: f64, attenuation: f64) -> Self {
        Self {
            wave_speed,
            spacing,
            time_step,
            beta: NEWMARK_BETA,
            boundary: Boundary::Free,
            damping: Damping::Undamped { attenuation },
        }
    }

    /// Viscous + stiffness damped wave with fixed edges
    pub fn damped(wave_speed: f64, spacing: f64, time_step: f64, viscosity: f64, stiffness: f64) -> Self {
        Self {
            wave_speed,
            spacing,
            time_step,
            beta: NEWMARK_BETA,
            boundary: Boundary::Fixed,
            damping: Damping::Damped { viscosity, stiffness },
        }
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_accepted() {
        let params: WaveParams = serde_json::from_str(
            r#"{"c": 4.0, "dx": 0.1, "dt": 0.02, "damping": {"kind": "damped", "a": 1.0, "k": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(params.wave_speed, 4.0);
        assert_eq!(params.beta, NEWMARK_BETA);
        assert_eq!(params.boundary, Boundary::Fixed);
        assert_eq!(params.damping, Damping::Damped { viscosity: 1.0, stiffness: 0.5 });
    }

    #[test]
    fn undamped_defaults_to_no_attenuation() {
        let damping: Damping = serde_json::from_str(r#"{"kind": "undamped"}"#).unwrap();
        assert_eq!(damping, Damping::Undamped { attenuation: 1.0 });
        assert!(!damping.is_damped());
    }
}
