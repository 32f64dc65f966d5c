use std::fs;
use std::path::PathBuf;

use wavefront_engine::{Boundary, PickTarget, WavePreset};

fn preset_json(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "presets", &format!("{}.json", name)]
        .iter()
        .collect();
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{} should exist: {}", path.display(), e))
}

#[test]
fn shipped_presets_match_builtins() {
    for name in ["wave_1d", "damped_wave_1d", "damped_wave_2d"] {
        let parsed = WavePreset::from_json(&preset_json(name)).expect("preset should parse");
        let builtin = WavePreset::builtin(name).expect("builtin preset");

        assert_eq!(parsed.name, builtin.name);
        assert_eq!(parsed.grid, builtin.grid);
        assert_eq!(parsed.params.boundary, builtin.params.boundary);
        assert_eq!(parsed.params.damping, builtin.params.damping);
        assert_eq!(parsed.solver.max_iteration, builtin.solver.max_iteration);
        assert!((parsed.params.time_step - builtin.params.time_step).abs() < 1e-12);
    }
}

#[test]
fn shipped_presets_build_and_run() {
    let wave_1d = WavePreset::from_json(&preset_json("wave_1d")).unwrap();
    let mut wave = wave_1d.build().expect("wave_1d builds");
    assert_eq!(wave.params().boundary, Boundary::Free);
    wave.pick_normalized(0.25, 1.0);
    wave.step_many(4);
    assert!(wave.last_solve().converged);

    let membrane = WavePreset::from_json(&preset_json("damped_wave_2d")).unwrap();
    let mut wave = membrane.build().expect("damped_wave_2d builds");
    assert_eq!(wave.pick_target(), PickTarget::Acceleration);
    assert_eq!(wave.solver().max_iteration, 8);
    wave.pick_cell(64, 64, 1.0);
    wave.step_many(3);
    assert!(wave.displacement().iter().all(|u| u.is_finite()));
    assert!(wave.displacement().iter().any(|&u| u != 0.0));
}
