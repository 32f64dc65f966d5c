//! Browser smoke test: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wavefront_engine::Wave;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn builtin_preset_steps_in_the_browser() {
    wavefront_engine::init();
    let mut wave = Wave::builtin("damped_wave_1d").expect("builtin preset");
    wave.pick_normalized(0.5, 1.0);
    wave.step_many(3);
    assert_eq!(wave.displacement().len(), 512);
    assert!(!wave.displacement_ptr().is_null());
}

#[wasm_bindgen_test]
fn invalid_constants_are_rejected() {
    assert!(Wave::wave_1d(64, -1.0, 0.1, 0.01, 1.0).is_err());
    assert!(Wave::from_preset("{\"grid\": 3}").is_err());
    assert!(Wave::builtin("burgers").is_err());
}
