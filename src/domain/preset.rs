//! WavePreset - JSON description of a demo and the validation gate in front
//! of the integrator
//!
//! The built-in presets reproduce the three browser demos.

use serde::{Deserialize, Serialize};

use crate::core::{Boundary, Grid};
use crate::simulation::WaveIntegrator;
use crate::solver::{Smoother, DEFAULT_MAX_ITERATION, DEFAULT_TOLERANCE};

use super::error::{PresetError, PresetResult};
use super::params::{Damping, WaveParams};
use super::pick::PickTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridShape {
    Line { length: usize },
    Lattice { width: usize, height: usize },
}

impl GridShape {
    pub fn validate(&self) -> PresetResult<()> {
        let too_small = match *self {
            GridShape::Line { length } => length < 2,
            GridShape::Lattice { width, height } => width < 2 || height < 2,
        };
        if too_small {
            let (width, height) = self.extents();
            return Err(PresetError::GridTooSmall { width, height });
        }
        Ok(())
    }

    /// (width, height); a line is one row high
    pub fn extents(&self) -> (usize, usize) {
        match *self {
            GridShape::Line { length } => (length, 1),
            GridShape::Lattice { width, height } => (width, height),
        }
    }

    pub fn to_grid(&self) -> Grid {
        match *self {
            GridShape::Line { length } => Grid::line(length),
            GridShape::Lattice { width, height } => Grid::lattice(width, height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iteration")]
    pub max_iteration: usize,
    #[serde(default)]
    pub smoother: Smoother,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iteration() -> usize {
    DEFAULT_MAX_ITERATION
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iteration: DEFAULT_MAX_ITERATION,
            smoother: Smoother::GaussSeidel,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> PresetResult<()> {
        check_positive("tolerance", self.tolerance)?;
        if self.max_iteration == 0 {
            return Err(PresetError::NoIterations);
        }
        if let Smoother::WeightedJacobi { omega } = self.smoother {
            check_positive("omega", omega)?;
            check_range("omega", omega, 0.0, 1.0)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WavePreset {
    #[serde(default)]
    pub name: String,
    pub grid: GridShape,
    #[serde(flatten)]
    pub params: WaveParams,
    #[serde(default)]
    pub solver: SolverSettings,
    /// Defaults to acceleration for damped lattices, displacement otherwise
    #[serde(default)]
    pub pick_target: Option<PickTarget>,
}

impl WavePreset {
    pub fn from_json(json: &str) -> PresetResult<Self> {
        let preset: WavePreset = serde_json::from_str(json)?;
        preset.validate()?;
        Ok(preset)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> PresetResult<()> {
        self.grid.validate()?;
        validate_params(&self.params)?;
        self.solver.validate()
    }

    /// Validate, then construct the integrator
    pub fn build(&self) -> PresetResult<WaveIntegrator> {
        self.validate()?;
        let mut wave = WaveIntegrator::new(self.grid.to_grid(), self.params);
        wave.configure_solver(&self.solver);
        if let Some(target) = self.pick_target {
            wave.set_pick_target(target);
        }
        Ok(wave)
    }

    // === Built-in demos ===

    /// Undamped 1D string, free edges
    pub fn wave_1d() -> Self {
        Self {
            name: "wave_1d".to_string(),
            grid: GridShape::Line { length: 512 },
            params: WaveParams::undamped(4.0, 0.1, 1.0 / 60.0, 1.0),
            solver: SolverSettings::default(),
            pick_target: None,
        }
    }

    /// Damped 1D string, fixed edges
    pub fn damped_wave_1d() -> Self {
        Self {
            name: "damped_wave_1d".to_string(),
            grid: GridShape::Line { length: 512 },
            params: WaveParams::damped(4.0, 0.1, 1.0 / 60.0, 1.0, 1.0),
            solver: SolverSettings::default(),
            pick_target: None,
        }
    }

    /// Damped 2D membrane driven through its acceleration, 8 solver iterations per step
    pub fn damped_wave_2d() -> Self {
        Self {
            name: "damped_wave_2d".to_string(),
            grid: GridShape::Lattice { width: 128, height: 128 },
            params: WaveParams::damped(4.0, 0.1, 1.0 / 60.0, 1.0, 1.0),
            solver: SolverSettings {
                max_iteration: 8,
                ..SolverSettings::default()
            },
            pick_target: Some(PickTarget::Acceleration),
        }
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "wave_1d" => Some(Self::wave_1d()),
            "damped_wave_1d" => Some(Self::damped_wave_1d()),
            "damped_wave_2d" => Some(Self::damped_wave_2d()),
            _ => None,
        }
    }
}

// === Validation helpers (shared with the wasm facade) ===

pub fn check_positive(name: &'static str, value: f64) -> PresetResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PresetError::NotPositive { name, value })
    }
}

pub fn check_non_negative(name: &'static str, value: f64) -> PresetResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PresetError::Negative { name, value })
    }
}

pub fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> PresetResult<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(PresetError::OutOfRange { name, value, min, max })
    }
}

pub fn check_boundary(coefficient: u32) -> PresetResult<Boundary> {
    Boundary::from_coefficient(coefficient).ok_or(PresetError::Boundary(coefficient))
}

/// Beta range offered by the demo UI
pub const BETA_RANGE: (f64, f64) = (0.0, 2.0);

pub fn validate_params(params: &WaveParams) -> PresetResult<()> {
    check_positive("wave_speed", params.wave_speed)?;
    check_positive("spacing", params.spacing)?;
    check_positive("time_step", params.time_step)?;
    check_range("beta", params.beta, BETA_RANGE.0, BETA_RANGE.1)?;
    match params.damping {
        Damping::Undamped { attenuation } => {
            check_range("attenuation", attenuation, 0.0, 1.0)?;
        }
        Damping::Damped { viscosity, stiffness } => {
            check_non_negative("viscosity", viscosity)?;
            check_non_negative("stiffness", stiffness)?;
        }
    }
    Ok(())
}
