use wasm_bindgen::prelude::*;

use crate::domain::preset::{check_boundary, check_non_negative, check_positive, check_range, BETA_RANGE};
use crate::domain::{GridShape, PresetError, PresetResult, SolverSettings, WaveParams, WavePreset};
use crate::solver::Smoother;

use super::perf_stats::PerfStats;
use super::WaveIntegrator;

fn js_error(err: PresetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing wave simulation. Every value from JS is validated here before
/// it reaches the integrator.
#[wasm_bindgen]
pub struct Wave {
    core: WaveIntegrator,
}

impl Wave {
    fn from_preset_value(preset: &WavePreset) -> PresetResult<Wave> {
        let core = preset.build()?;
        console_log!(
            "wave: {} ({}x{}, {} cells)",
            if preset.name.is_empty() { "custom" } else { preset.name.as_str() },
            core.grid().width(),
            core.grid().height(),
            core.grid().size()
        );
        Ok(Wave { core })
    }

    fn from_parts(grid: GridShape, params: WaveParams, solver: SolverSettings) -> Result<Wave, JsValue> {
        let preset = WavePreset {
            name: String::new(),
            grid,
            params,
            solver,
            pick_target: None,
        };
        Self::from_preset_value(&preset).map_err(js_error)
    }

    /// Native access to the integrator (not exported to JS)
    pub fn core(&self) -> &WaveIntegrator {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WaveIntegrator {
        &mut self.core
    }
}

#[wasm_bindgen]
impl Wave {
    /// Undamped 1D string with free edges
    #[wasm_bindgen(js_name = wave1d)]
    pub fn wave_1d(length: usize, c: f64, dx: f64, dt: f64, attenuation: f64) -> Result<Wave, JsValue> {
        Self::from_parts(
            GridShape::Line { length },
            WaveParams::undamped(c, dx, dt, attenuation),
            SolverSettings::default(),
        )
    }

    /// Damped 1D string with fixed edges
    #[wasm_bindgen(js_name = damped1d)]
    pub fn damped_1d(length: usize, c: f64, dx: f64, dt: f64, a: f64, k: f64) -> Result<Wave, JsValue> {
        Self::from_parts(
            GridShape::Line { length },
            WaveParams::damped(c, dx, dt, a, k),
            SolverSettings::default(),
        )
    }

    /// Damped 2D membrane with fixed edges, 8 solver iterations per step
    #[wasm_bindgen(js_name = damped2d)]
    pub fn damped_2d(width: usize, height: usize, c: f64, dx: f64, dt: f64, a: f64, k: f64) -> Result<Wave, JsValue> {
        Self::from_parts(
            GridShape::Lattice { width, height },
            WaveParams::damped(c, dx, dt, a, k),
            WavePreset::damped_wave_2d().solver,
        )
    }

    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(json: &str) -> Result<Wave, JsValue> {
        let preset = WavePreset::from_json(json).map_err(js_error)?;
        Self::from_preset_value(&preset).map_err(js_error)
    }

    /// One of `wave_1d`, `damped_wave_1d`, `damped_wave_2d`
    pub fn builtin(name: &str) -> Result<Wave, JsValue> {
        let preset = WavePreset::builtin(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))
            .map_err(js_error)?;
        Self::from_preset_value(&preset).map_err(js_error)
    }

    // === Dimensions ===

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize { self.core.grid().width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize { self.core.grid().height() }

    pub fn len(&self) -> usize { self.core.grid().size() }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u64 { self.core.steps() }

    // === Rendering ===

    /// Copy of the displacement field
    pub fn displacement(&self) -> Vec<f64> {
        self.core.displacement().to_vec()
    }

    /// Pointer into wasm memory; view it as a Float64Array of `len()` samples.
    /// Invalidated if wasm memory grows.
    pub fn displacement_ptr(&self) -> *const f64 {
        self.core.displacement_ptr()
    }

    pub fn energy(&self) -> f64 {
        self.core.energy()
    }

    // === Driving ===

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn step_many(&mut self, count: u32) {
        self.core.step_many(count);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === Pick ===

    pub fn pick(&mut self, index: usize, value: f64) {
        self.core.pick(index, value);
    }

    #[wasm_bindgen(js_name = pickNormalized)]
    pub fn pick_normalized(&mut self, x: f64, value: f64) {
        self.core.pick_normalized(x, value);
    }

    #[wasm_bindgen(js_name = pickCell)]
    pub fn pick_cell(&mut self, x: i32, y: i32, value: f64) {
        self.core.pick_cell(x as i64, y as i64, value);
    }

    #[wasm_bindgen(js_name = releasePick)]
    pub fn release_pick(&mut self) {
        self.core.release_pick();
    }

    // === Constants ===

    #[wasm_bindgen(getter)]
    pub fn wave_speed(&self) -> f64 { self.core.params().wave_speed }

    #[wasm_bindgen(getter)]
    pub fn spacing(&self) -> f64 { self.core.params().spacing }

    #[wasm_bindgen(getter)]
    pub fn time_step(&self) -> f64 { self.core.params().time_step }

    #[wasm_bindgen(getter)]
    pub fn beta(&self) -> f64 { self.core.params().beta }

    /// 1 = fixed, 2 = free
    #[wasm_bindgen(getter)]
    pub fn boundary(&self) -> u32 { self.core.params().boundary.coefficient() as u32 }

    pub fn set_wave_speed(&mut self, c: f64) -> Result<(), JsValue> {
        let c = check_positive("wave_speed", c).map_err(js_error)?;
        self.core.set_wave_speed(c);
        Ok(())
    }

    pub fn set_spacing(&mut self, dx: f64) -> Result<(), JsValue> {
        let dx = check_positive("spacing", dx).map_err(js_error)?;
        self.core.set_spacing(dx);
        Ok(())
    }

    pub fn set_time_step(&mut self, dt: f64) -> Result<(), JsValue> {
        let dt = check_positive("time_step", dt).map_err(js_error)?;
        self.core.set_time_step(dt);
        Ok(())
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<(), JsValue> {
        let beta = check_range("beta", beta, BETA_RANGE.0, BETA_RANGE.1).map_err(js_error)?;
        self.core.set_beta(beta);
        Ok(())
    }

    pub fn set_boundary(&mut self, coefficient: u32) -> Result<(), JsValue> {
        let boundary = check_boundary(coefficient).map_err(js_error)?;
        self.core.set_boundary(boundary);
        Ok(())
    }

    pub fn set_attenuation(&mut self, attenuation: f64) -> Result<(), JsValue> {
        let attenuation = check_range("attenuation", attenuation, 0.0, 1.0).map_err(js_error)?;
        if !self.core.set_attenuation(attenuation) {
            return Err(js_error(PresetError::NotApplicable("attenuation")));
        }
        Ok(())
    }

    pub fn set_viscosity(&mut self, a: f64) -> Result<(), JsValue> {
        let a = check_non_negative("viscosity", a).map_err(js_error)?;
        if !self.core.set_viscosity(a) {
            return Err(js_error(PresetError::NotApplicable("viscosity")));
        }
        Ok(())
    }

    pub fn set_stiffness(&mut self, k: f64) -> Result<(), JsValue> {
        let k = check_non_negative("stiffness", k).map_err(js_error)?;
        if !self.core.set_stiffness(k) {
            return Err(js_error(PresetError::NotApplicable("stiffness")));
        }
        Ok(())
    }

    // === Solver ===

    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), JsValue> {
        let tolerance = check_positive("tolerance", tolerance).map_err(js_error)?;
        self.core.set_tolerance(tolerance);
        Ok(())
    }

    pub fn set_max_iteration(&mut self, max_iteration: u32) -> Result<(), JsValue> {
        if max_iteration == 0 {
            return Err(js_error(PresetError::NoIterations));
        }
        self.core.set_max_iteration(max_iteration as usize);
        Ok(())
    }

    pub fn use_gauss_seidel(&mut self) {
        self.core.set_smoother(Smoother::GaussSeidel);
    }

    pub fn use_weighted_jacobi(&mut self, omega: f64) -> Result<(), JsValue> {
        let settings = SolverSettings {
            smoother: Smoother::WeightedJacobi { omega },
            ..SolverSettings::default()
        };
        settings.validate().map_err(js_error)?;
        self.core.set_smoother(settings.smoother);
        Ok(())
    }

    // === Perf ===

    /// Enable or disable per-step timings (solver telemetry is always recorded)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}
